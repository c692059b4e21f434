//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose session-scoped store queries and commands to Dart via FRB.
//! - Translate core types into flat, string-keyed view structs.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - The store lives inside an opaque [`KiretaSession`] owned by Dart; there
//!   is no process-wide store.
//! - Calls on one session are serialized by its mutex.

use chrono::Utc;
use kireta_core::{
    core_version as core_version_inner, default_log_level, init_logging as init_logging_inner,
    ping as ping_inner, DateString, DynJournal, ItemId, Session, SessionConfig, Store,
};
use log::warn;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Opaque handle to one application session.
#[flutter_rust_bridge::frb(opaque)]
pub struct KiretaSession {
    inner: Mutex<Session<DynJournal>>,
}

impl KiretaSession {
    fn lock(&self) -> MutexGuard<'_, Session<DynJournal>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the store so async callers never hold the lock across an
    /// await point.
    fn snapshot(&self) -> Store {
        self.lock().store().clone()
    }
}

/// Catalog item as seen by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub id: String,
    pub name: String,
}

/// Check-list as seen by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckListView {
    pub id: String,
    /// `YYYY-MM-DD`.
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDetailView {
    pub item: ItemView,
    pub check_lists: Vec<CheckListView>,
    pub days_since_last_checked: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayEntryView {
    pub item: ItemView,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayScreenView {
    pub date: String,
    pub check_list_id: Option<String>,
    pub entries: Vec<TodayEntryView>,
}

/// Generic action response envelope for command flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the command was accepted.
    pub ok: bool,
    /// Id of the created or affected entity.
    pub id: Option<String>,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, id: String) -> Self {
        Self {
            ok: true,
            id: Some(id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Sync call; may create the log directory.
/// - Safe to repeat with the same `level + log_dir`.
/// - Blank `level` falls back to the build-mode default.
/// - Returns empty string on success and the error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    let level = match level.trim() {
        "" => default_log_level(),
        level => level,
    };
    match init_logging_inner(level, log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Opens a session.
///
/// Input semantics:
/// - `journal_path`: SQLite journal file; `None` or blank keeps the session
///   in memory.
/// - `seed_sample_data`: seed the sample catalog into an empty journal.
///
/// # FFI contract
/// - Sync call; replays the journal before returning.
/// - Returns an error message when the journal cannot be opened or replayed.
#[flutter_rust_bridge::frb(sync)]
pub fn open_session(
    journal_path: Option<String>,
    seed_sample_data: bool,
) -> Result<KiretaSession, String> {
    let mut config = SessionConfig::in_memory().with_sample_data(seed_sample_data);
    if let Some(path) = journal_path.filter(|path| !path.trim().is_empty()) {
        config = config.with_journal_path(path.trim());
    }
    session_from_config(&config)
}

/// Opens a session configured by `KIRETA_JOURNAL_PATH` and
/// `KIRETA_SEED_SAMPLE_DATA`.
#[flutter_rust_bridge::frb(sync)]
pub fn open_session_from_env() -> Result<KiretaSession, String> {
    session_from_config(&SessionConfig::from_env())
}

fn session_from_config(config: &SessionConfig) -> Result<KiretaSession, String> {
    Session::from_config(config)
        .map(|session| KiretaSession {
            inner: Mutex::new(session),
        })
        .map_err(|err| format!("open_session failed: {err}"))
}

/// Catalog items in insertion order.
#[flutter_rust_bridge::frb(sync)]
pub fn list_items(session: &KiretaSession) -> Vec<ItemView> {
    let session = session.lock();
    kireta_core::find_all_items(session.store())
        .into_iter()
        .map(to_item_view)
        .collect()
}

/// History screen: check-lists, most recent first.
#[flutter_rust_bridge::frb(sync)]
pub fn history(session: &KiretaSession) -> Vec<CheckListView> {
    let session = session.lock();
    kireta_core::find_all_check_lists(session.store())
        .into_iter()
        .map(to_check_list_view)
        .collect()
}

/// Item screen data; `None` for a stale id.
#[flutter_rust_bridge::frb(sync)]
pub fn item_detail(session: &KiretaSession, item_id: String) -> Option<ItemDetailView> {
    let session = session.lock();
    kireta_core::item_detail(session.store(), &item_id.into(), Utc::now()).map(|detail| {
        ItemDetailView {
            item: to_item_view(&detail.item),
            check_lists: detail.check_lists.iter().map(to_check_list_view).collect(),
            days_since_last_checked: detail.days_since_last_checked,
        }
    })
}

/// Check-list screen data: checked items of one check-list.
#[flutter_rust_bridge::frb(sync)]
pub fn check_list_items(session: &KiretaSession, check_list_id: String) -> Vec<ItemView> {
    let session = session.lock();
    kireta_core::check_list_detail(session.store(), &check_list_id.into())
        .map(|detail| detail.checked_items.iter().map(to_item_view).collect())
        .unwrap_or_default()
}

/// Today screen data for the current UTC date.
#[flutter_rust_bridge::frb(sync)]
pub fn today(session: &KiretaSession) -> TodayScreenView {
    let session = session.lock();
    let view = kireta_core::today(session.store(), Utc::now());
    TodayScreenView {
        date: view.date.to_string(),
        check_list_id: view.check_list.map(|check_list| check_list.id.into_inner()),
        entries: view
            .entries
            .iter()
            .map(|entry| TodayEntryView {
                item: to_item_view(&entry.item),
                checked: entry.checked,
            })
            .collect(),
    }
}

/// Adds a catalog item. Blank names are rejected.
#[flutter_rust_bridge::frb(sync)]
pub fn add_item(session: &KiretaSession, name: String) -> ActionResponse {
    let Some(name) = normalize_name(&name) else {
        return ActionResponse::failure("add_item failed: name must not be blank");
    };
    match session.lock().add_item(name) {
        Ok(item) => ActionResponse::success("Item added.", item.id.into_inner()),
        Err(err) => ActionResponse::failure(format!("add_item failed: {err}")),
    }
}

/// Renames an existing item; a stale id is reported, not created.
#[flutter_rust_bridge::frb(sync)]
pub fn rename_item(session: &KiretaSession, item_id: String, name: String) -> ActionResponse {
    let Some(name) = normalize_name(&name) else {
        return ActionResponse::failure("rename_item failed: name must not be blank");
    };
    match session.lock().rename_item(&ItemId::from(item_id), name) {
        Ok(Some(item)) => ActionResponse::success("Item renamed.", item.id.into_inner()),
        Ok(None) => ActionResponse::failure("rename_item failed: item not found"),
        Err(err) => ActionResponse::failure(format!("rename_item failed: {err}")),
    }
}

/// Sets the checked flag of an item on `date` (`YYYY-MM-DD`), creating that
/// date's check-list when needed. Returns the check-list id.
#[flutter_rust_bridge::frb(sync)]
pub fn set_checked(
    session: &KiretaSession,
    date: String,
    item_id: String,
    checked: bool,
) -> ActionResponse {
    let date = match DateString::parse(date.trim()) {
        Ok(date) => date,
        Err(err) => return ActionResponse::failure(format!("set_checked failed: {err}")),
    };
    let mut session = session.lock();
    let result = session
        .set_checked_on(date, &item_id.into(), checked)
        .and_then(|()| session.ensure_check_list(date));
    match result {
        Ok(check_list) => ActionResponse::success("Checked state saved.", check_list.id.into_inner()),
        Err(err) => ActionResponse::failure(format!("set_checked failed: {err}")),
    }
}

/// Flips an item's checked flag for today's UTC date.
///
/// `message` carries `checked` or `unchecked` on success.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_checked_today(session: &KiretaSession, item_id: String) -> ActionResponse {
    let date = DateString::from_utc(Utc::now());
    let item_id = ItemId::from(item_id);
    let mut session = session.lock();
    match session.toggle_checked_on(date, &item_id) {
        Ok(checked) => ActionResponse::success(
            if checked { "checked" } else { "unchecked" },
            item_id.into_inner(),
        ),
        Err(err) => {
            warn!("event=toggle_checked module=ffi status=error error={err}");
            ActionResponse::failure(format!("toggle_checked_today failed: {err}"))
        }
    }
}

/// Async form of [`history`] for callers that must not block the UI isolate.
pub async fn history_async(session: &KiretaSession) -> Vec<CheckListView> {
    let store = session.snapshot();
    kireta_core::store::nonblocking::find_all_check_lists(&store)
        .await
        .iter()
        .map(to_check_list_view)
        .collect()
}

/// Async form of [`list_items`].
pub async fn list_items_async(session: &KiretaSession) -> Vec<ItemView> {
    let store = session.snapshot();
    kireta_core::store::nonblocking::find_all_items(&store)
        .await
        .iter()
        .map(to_item_view)
        .collect()
}

fn normalize_name(name: &str) -> Option<&str> {
    Some(name.trim()).filter(|name| !name.is_empty())
}

fn to_item_view(item: &kireta_core::Item) -> ItemView {
    ItemView {
        id: item.id.to_string(),
        name: item.name.clone(),
    }
}

fn to_check_list_view(check_list: &kireta_core::CheckList) -> CheckListView {
    CheckListView {
        id: check_list.id.to_string(),
        date: check_list.date.to_string(),
    }
}
