//! Async veneer over the synchronous store API.
//!
//! Every function completes on first poll; there is no suspension point
//! between reading and writing the store. Results are owned so they can
//! outlive the borrow of the store.

use crate::model::check_list::CheckList;
use crate::model::date::DateString;
use crate::model::id::{CheckListId, ItemId};
use crate::model::item::Item;
use crate::store::command::{self, Command};
use crate::store::{query, Store, StoreResult};
use chrono::{DateTime, Utc};

pub async fn find_item(store: &Store, item_id: &ItemId) -> Option<Item> {
    query::find_item(store, item_id).cloned()
}

pub async fn find_all_item_ids(store: &Store) -> Vec<ItemId> {
    query::find_all_item_ids(store).into_iter().cloned().collect()
}

pub async fn find_all_items(store: &Store) -> Vec<Item> {
    query::find_all_items(store).into_iter().cloned().collect()
}

pub async fn find_check_list(store: &Store, check_list_id: &CheckListId) -> Option<CheckList> {
    query::find_check_list(store, check_list_id).cloned()
}

pub async fn find_check_list_by_date(store: &Store, date: &DateString) -> Option<CheckList> {
    query::find_check_list_by_date(store, date).cloned()
}

pub async fn find_all_check_list_ids(store: &Store) -> Vec<CheckListId> {
    query::find_all_check_list_ids(store)
        .into_iter()
        .cloned()
        .collect()
}

pub async fn find_all_check_lists(store: &Store) -> Vec<CheckList> {
    query::find_all_check_lists(store)
        .into_iter()
        .cloned()
        .collect()
}

pub async fn find_all_check_list_dates(store: &Store) -> Vec<DateString> {
    query::find_all_check_list_dates(store)
}

pub async fn find_checked(store: &Store, check_list_id: &CheckListId, item_id: &ItemId) -> bool {
    query::find_checked(store, check_list_id, item_id)
}

pub async fn find_checked_item_ids_by_check_list_id(
    store: &Store,
    check_list_id: &CheckListId,
) -> Vec<ItemId> {
    query::find_checked_item_ids_by_check_list_id(store, check_list_id)
        .into_iter()
        .cloned()
        .collect()
}

pub async fn find_checked_check_list_ids_by_item_id(
    store: &Store,
    item_id: &ItemId,
) -> Vec<CheckListId> {
    query::find_checked_check_list_ids_by_item_id(store, item_id)
        .into_iter()
        .cloned()
        .collect()
}

pub async fn days_since_last_checked(
    store: &Store,
    item_id: &ItemId,
    now: DateTime<Utc>,
) -> Option<i64> {
    query::days_since_last_checked(store, item_id, now)
}

pub async fn handle(store: &mut Store, command: Command) -> StoreResult<()> {
    command::handle(store, command)
}
