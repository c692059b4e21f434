//! Read-only store queries.
//!
//! Unknown ids are never an error: lookups return `None`, relation queries
//! return `false` or an empty list.

use crate::model::check_list::CheckList;
use crate::model::date::DateString;
use crate::model::id::{CheckListId, ItemId};
use crate::model::item::Item;
use crate::store::Store;
use chrono::{DateTime, Utc};

pub fn find_item<'s>(store: &'s Store, item_id: &ItemId) -> Option<&'s Item> {
    store.items.by_id.get(item_id)
}

/// Item ids in insertion order.
pub fn find_all_item_ids(store: &Store) -> Vec<&ItemId> {
    store.items.all_ids.iter().collect()
}

/// Items in insertion order.
pub fn find_all_items(store: &Store) -> Vec<&Item> {
    store
        .items
        .all_ids
        .iter()
        .filter_map(|id| find_item(store, id))
        .collect()
}

pub fn find_check_list<'s>(store: &'s Store, check_list_id: &CheckListId) -> Option<&'s CheckList> {
    store.check_lists.by_id.get(check_list_id)
}

pub fn find_check_list_by_date<'s>(store: &'s Store, date: &DateString) -> Option<&'s CheckList> {
    store
        .check_lists
        .id_for_date(date)
        .and_then(|id| find_check_list(store, id))
}

/// Check-list ids in insertion order.
pub fn find_all_check_list_ids(store: &Store) -> Vec<&CheckListId> {
    store.check_lists.all_ids.iter().collect()
}

/// Check-lists sorted by date, most recent first.
pub fn find_all_check_lists(store: &Store) -> Vec<&CheckList> {
    let mut check_lists = store
        .check_lists
        .all_ids
        .iter()
        .filter_map(|id| find_check_list(store, id))
        .collect::<Vec<_>>();
    check_lists.sort_by(|a, b| b.date.cmp(&a.date));
    check_lists
}

/// Dates of all check-lists, in check-list insertion order.
pub fn find_all_check_list_dates(store: &Store) -> Vec<DateString> {
    store
        .check_lists
        .all_ids
        .iter()
        .filter_map(|id| find_check_list(store, id))
        .map(|check_list| check_list.date)
        .collect()
}

pub fn find_checked(store: &Store, check_list_id: &CheckListId, item_id: &ItemId) -> bool {
    store.checked.get(check_list_id, item_id)
}

pub fn find_checked_item_ids_by_check_list_id<'s>(
    store: &'s Store,
    check_list_id: &CheckListId,
) -> Vec<&'s ItemId> {
    store.checked.checked_item_ids(check_list_id)
}

pub fn find_checked_check_list_ids_by_item_id<'s>(
    store: &'s Store,
    item_id: &ItemId,
) -> Vec<&'s CheckListId> {
    store.checked.checked_check_list_ids(item_id)
}

/// Check-lists in which `item_id` is checked, most recent first.
///
/// Relation entries pointing at check-lists missing from the table are
/// skipped.
pub fn find_checked_check_lists_by_item_id<'s>(
    store: &'s Store,
    item_id: &ItemId,
) -> Vec<&'s CheckList> {
    let mut check_lists = find_checked_check_list_ids_by_item_id(store, item_id)
        .into_iter()
        .filter_map(|id| find_check_list(store, id))
        .collect::<Vec<_>>();
    check_lists.sort_by(|a, b| b.date.cmp(&a.date));
    check_lists
}

/// Whole days between the most recent check-list in which `item_id` is
/// checked and `now`, counted from 00:00 UTC of that check-list's date.
///
/// Returns `None` when the item is checked nowhere.
pub fn days_since_last_checked(store: &Store, item_id: &ItemId, now: DateTime<Utc>) -> Option<i64> {
    find_checked_check_lists_by_item_id(store, item_id)
        .first()
        .map(|latest| latest.date.days_until(now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::command::{handle, Command};
    use chrono::TimeZone;

    fn date(text: &str) -> DateString {
        DateString::parse(text).unwrap()
    }

    #[test]
    fn latest_check_list_wins_regardless_of_check_order() {
        let mut store = Store::new();
        let item = Item::with_id("i1", "Milk");
        handle(&mut store, Command::add_item(item.clone())).unwrap();
        for (id, text) in [("c2", "2023-09-09"), ("c1", "2023-09-07"), ("c3", "2023-09-08")] {
            handle(
                &mut store,
                Command::add_check_list(CheckList::with_id(id, date(text))),
            )
            .unwrap();
            handle(&mut store, Command::set_checked(id.into(), item.id.clone(), true)).unwrap();
        }

        let now = Utc.with_ymd_and_hms(2023, 9, 10, 8, 0, 0).unwrap();
        assert_eq!(days_since_last_checked(&store, &item.id, now), Some(1));
    }

    #[test]
    fn dangling_relation_entries_are_ignored_for_days() {
        let mut store = Store::new();
        handle(
            &mut store,
            Command::set_checked("ghost".into(), "i1".into(), true),
        )
        .unwrap();

        let now = Utc.with_ymd_and_hms(2023, 9, 10, 0, 0, 0).unwrap();
        assert_eq!(days_since_last_checked(&store, &"i1".into(), now), None);
        assert_eq!(
            find_checked_check_list_ids_by_item_id(&store, &"i1".into()),
            vec![&CheckListId::from("ghost")]
        );
    }
}
