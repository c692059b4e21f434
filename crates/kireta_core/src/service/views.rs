//! Derived view data for the item, check-list and today screens.
//!
//! All functions are pure reads; unknown ids yield `None` or empty lists.

use crate::model::check_list::CheckList;
use crate::model::date::DateString;
use crate::model::id::{CheckListId, ItemId};
use crate::model::item::Item;
use crate::store::query::{
    days_since_last_checked, find_all_items, find_check_list, find_check_list_by_date,
    find_checked, find_checked_check_lists_by_item_id, find_checked_item_ids_by_check_list_id,
    find_item,
};
use crate::store::Store;
use chrono::{DateTime, Utc};

/// Item screen data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDetail {
    pub item: Item,
    /// Check-lists in which the item is checked, most recent first.
    pub check_lists: Vec<CheckList>,
    /// `None` when the item was never checked.
    pub days_since_last_checked: Option<i64>,
}

/// Check-list screen data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckListDetail {
    pub check_list: CheckList,
    pub checked_items: Vec<Item>,
}

/// One catalog row on the today screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayEntry {
    pub item: Item,
    pub checked: bool,
}

/// Today screen data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayView {
    pub date: DateString,
    /// `None` until something is checked today.
    pub check_list: Option<CheckList>,
    /// Every item in catalog order.
    pub entries: Vec<TodayEntry>,
}

pub fn item_detail(store: &Store, item_id: &ItemId, now: DateTime<Utc>) -> Option<ItemDetail> {
    let item = find_item(store, item_id)?.clone();
    let check_lists = find_checked_check_lists_by_item_id(store, item_id)
        .into_iter()
        .cloned()
        .collect();
    Some(ItemDetail {
        item,
        check_lists,
        days_since_last_checked: days_since_last_checked(store, item_id, now),
    })
}

/// Checked items of a check-list; relation entries for unknown items are
/// skipped.
pub fn check_list_detail(store: &Store, check_list_id: &CheckListId) -> Option<CheckListDetail> {
    let check_list = find_check_list(store, check_list_id)?.clone();
    let checked_items = find_checked_item_ids_by_check_list_id(store, check_list_id)
        .into_iter()
        .filter_map(|id| find_item(store, id))
        .cloned()
        .collect();
    Some(CheckListDetail {
        check_list,
        checked_items,
    })
}

pub fn today(store: &Store, now: DateTime<Utc>) -> TodayView {
    let date = DateString::from_utc(now);
    let check_list = find_check_list_by_date(store, &date).cloned();
    let entries = find_all_items(store)
        .into_iter()
        .map(|item| TodayEntry {
            item: item.clone(),
            checked: check_list
                .as_ref()
                .is_some_and(|check_list| find_checked(store, &check_list.id, &item.id)),
        })
        .collect();
    TodayView {
        date,
        check_list,
        entries,
    }
}
