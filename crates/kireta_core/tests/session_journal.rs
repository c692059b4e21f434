use kireta_core::db::open_db;
use kireta_core::{
    find_all_check_lists, find_all_items, find_checked, CheckList, Command, CommandJournal,
    DateString, Item, NullJournal, RepoError, Session, SessionConfig, SessionError,
    SqliteCommandJournal, StoreError,
};

fn date(text: &str) -> DateString {
    DateString::parse(text).unwrap()
}

#[test]
fn journal_replay_rebuilds_the_same_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kireta.sqlite3");
    let config = SessionConfig::in_memory().with_journal_path(&path);

    let expected = {
        let mut session = Session::open(SqliteCommandJournal::open(&path).unwrap(), &config).unwrap();
        let milk = session.add_item("Milk").unwrap();
        let eggs = session.add_item("Eggs").unwrap();
        session.set_checked_on(date("2023-09-07"), &milk.id, true).unwrap();
        session.set_checked_on(date("2023-09-08"), &eggs.id, true).unwrap();
        session.rename_item(&eggs.id, "Free-range eggs").unwrap();
        session.store().clone()
    };

    let reopened = Session::open(SqliteCommandJournal::open(&path).unwrap(), &config).unwrap();
    assert_eq!(reopened.store(), &expected);
    assert_eq!(reopened.journal().len().unwrap(), 7);
}

#[test]
fn rejected_commands_are_not_journaled() {
    let journal = SqliteCommandJournal::open_in_memory().unwrap();
    let mut session = Session::open(journal, &SessionConfig::in_memory()).unwrap();

    session
        .dispatch(Command::add_check_list(CheckList::with_id("c1", date("2023-09-07"))))
        .unwrap();
    let err = session
        .dispatch(Command::add_check_list(CheckList::with_id("c2", date("2023-09-07"))))
        .unwrap_err();

    assert!(matches!(
        err,
        SessionError::Store(StoreError::DuplicateCheckListDate { .. })
    ));
    assert_eq!(session.journal().len().unwrap(), 1);
    assert_eq!(find_all_check_lists(session.store()).len(), 1);
}

#[test]
fn seed_data_is_written_only_into_an_empty_journal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seeded.sqlite3");
    let config = SessionConfig::in_memory()
        .with_journal_path(&path)
        .with_sample_data(true);

    let first = Session::from_config(&config).unwrap();
    assert_eq!(find_all_items(first.store()).len(), 2);
    assert_eq!(find_all_check_lists(first.store()).len(), 3);
    drop(first);

    let second = Session::from_config(&config).unwrap();
    assert_eq!(find_all_items(second.store()).len(), 2);
    assert_eq!(find_all_check_lists(second.store()).len(), 3);
}

#[test]
fn failed_seed_leaves_journal_empty_and_retries_on_next_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seed-failure.sqlite3");
    let config = SessionConfig::in_memory()
        .with_journal_path(&path)
        .with_sample_data(true);

    let journal = SqliteCommandJournal::open(&path).unwrap();
    journal
        .connection()
        .execute_batch(
            "CREATE TRIGGER reject_fourth_command BEFORE INSERT ON commands
             WHEN (SELECT COUNT(*) FROM commands) >= 3
             BEGIN SELECT RAISE(ABORT, 'journal full'); END;",
        )
        .unwrap();
    let err = Session::open(journal, &config)
        .err()
        .expect("seeding must fail on the fourth insert");
    assert!(matches!(err, SessionError::Repo(_)), "{err}");

    let journal = SqliteCommandJournal::open(&path).unwrap();
    assert!(journal.is_empty().unwrap());
    journal
        .connection()
        .execute_batch("DROP TRIGGER reject_fourth_command;")
        .unwrap();

    let session = Session::open(journal, &config).unwrap();
    assert_eq!(find_all_items(session.store()).len(), 2);
    assert_eq!(find_all_check_lists(session.store()).len(), 3);
    assert_eq!(session.journal().len().unwrap(), 9);
}

#[test]
fn ensure_check_list_reuses_existing_date() {
    let mut session = Session::in_memory(&SessionConfig::in_memory()).unwrap();
    let first = session.ensure_check_list(date("2023-09-07")).unwrap();
    let second = session.ensure_check_list(date("2023-09-07")).unwrap();
    assert_eq!(first, second);
    assert_eq!(session.store().check_list_count(), 1);
}

#[test]
fn toggle_checked_on_flips_the_flag() {
    let mut session = Session::in_memory(&SessionConfig::in_memory()).unwrap();
    let item = session.add_item("Milk").unwrap();
    let today = date("2023-09-07");

    assert!(session.toggle_checked_on(today, &item.id).unwrap());
    let check_list = session.ensure_check_list(today).unwrap();
    assert!(find_checked(session.store(), &check_list.id, &item.id));

    assert!(!session.toggle_checked_on(today, &item.id).unwrap());
    assert!(!find_checked(session.store(), &check_list.id, &item.id));
}

#[test]
fn rename_of_stale_id_is_ignored() {
    let mut session = Session::open(NullJournal, &SessionConfig::in_memory()).unwrap();
    assert_eq!(session.rename_item(&"missing".into(), "Anything").unwrap(), None);
    assert_eq!(session.store().item_count(), 0);
}

#[test]
fn corrupt_journal_row_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.sqlite3");
    let conn = open_db(&path).unwrap();
    conn.execute(
        "INSERT INTO commands (kind, payload) VALUES ('addItem', ?1);",
        [serde_json::to_string(&Command::set_item(Item::with_id("i1", "Milk"))).unwrap()],
    )
    .unwrap();
    drop(conn);

    let journal = SqliteCommandJournal::open(&path).unwrap();
    let err = journal.load_all().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData { seq: 1, .. }), "{err}");
}

#[test]
fn conflicting_journal_fails_replay() {
    let mut journal = SqliteCommandJournal::open_in_memory().unwrap();
    let item = Item::with_id("i1", "Milk");
    journal.append(&Command::add_item(item.clone())).unwrap();
    journal.append(&Command::add_item(item)).unwrap();

    let err = Session::open(journal, &SessionConfig::in_memory())
        .err()
        .expect("duplicate add must fail replay");
    assert!(matches!(
        err,
        SessionError::Replay {
            index: 1,
            source: StoreError::DuplicateItemId(_)
        }
    ));
}
