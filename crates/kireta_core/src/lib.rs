//! Core domain logic for kireta, a recurring checklist.
//! This crate owns the store, its invariants and the derived views; UI layers
//! call in through queries and commands only.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use config::SessionConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::check_list::{new_check_list, CheckList};
pub use model::date::{DateString, ModelValidationError};
pub use model::id::{new_id, CheckListId, ItemId};
pub use model::item::{new_item, Item};
pub use repo::journal_repo::{
    CommandJournal, NullJournal, RepoError, RepoResult, SqliteCommandJournal,
};
pub use service::session::{DynJournal, Session, SessionError, SessionResult};
pub use service::views::{
    check_list_detail, item_detail, today, CheckListDetail, ItemDetail, TodayEntry, TodayView,
};
pub use store::command::{handle, validate_command, Command};
pub use store::query::{
    days_since_last_checked, find_all_check_list_dates, find_all_check_list_ids,
    find_all_check_lists, find_all_item_ids, find_all_items, find_check_list,
    find_check_list_by_date, find_checked, find_checked_check_list_ids_by_item_id,
    find_checked_check_lists_by_item_id, find_checked_item_ids_by_check_list_id, find_item,
};
pub use store::{new_store, CheckedRelation, Store, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
