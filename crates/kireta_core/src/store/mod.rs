//! Normalized in-memory store for items, check-lists and the checked relation.
//!
//! # Responsibility
//! - Hold the three tables behind one value owned by the application session.
//! - Expose read-only queries ([`query`]) and one mutation path ([`command`]).
//!
//! # Invariants
//! - `all_ids` lists are append-only, duplicate-free and in insertion order;
//!   they are the enumeration source of truth, `by_id` is a lookup cache.
//! - At most one check-list exists per date (`by_date`).
//! - Nothing outside [`command`] mutates the tables.

pub mod checked;
pub mod command;
mod error;
pub mod nonblocking;
pub mod query;
pub mod sample;

use crate::model::check_list::CheckList;
use crate::model::date::DateString;
use crate::model::id::{CheckListId, ItemId};
use crate::model::item::Item;
use std::collections::HashMap;

pub use checked::CheckedRelation;
pub use error::{StoreError, StoreResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ItemTable {
    pub(crate) all_ids: Vec<ItemId>,
    pub(crate) by_id: HashMap<ItemId, Item>,
}

impl ItemTable {
    pub(crate) fn contains(&self, id: &ItemId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Replaces the record for a known id, appends an unknown one.
    pub(crate) fn upsert(&mut self, item: Item) {
        if !self.by_id.contains_key(&item.id) {
            self.all_ids.push(item.id.clone());
        }
        self.by_id.insert(item.id.clone(), item);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CheckListTable {
    pub(crate) all_ids: Vec<CheckListId>,
    pub(crate) by_id: HashMap<CheckListId, CheckList>,
    pub(crate) by_date: HashMap<DateString, CheckListId>,
}

impl CheckListTable {
    pub(crate) fn contains(&self, id: &CheckListId) -> bool {
        self.by_id.contains_key(id)
    }

    pub(crate) fn id_for_date(&self, date: &DateString) -> Option<&CheckListId> {
        self.by_date.get(date)
    }

    /// Caller must have ruled out duplicate ids and dates.
    pub(crate) fn insert(&mut self, check_list: CheckList) {
        self.all_ids.push(check_list.id.clone());
        self.by_date
            .insert(check_list.date, check_list.id.clone());
        self.by_id.insert(check_list.id.clone(), check_list);
    }
}

/// Session-scoped in-memory database.
///
/// Construct one per application session and pass it by reference; there is
/// no process-wide instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    pub(crate) items: ItemTable,
    pub(crate) check_lists: CheckListTable,
    pub(crate) checked: CheckedRelation,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item_count(&self) -> usize {
        self.items.all_ids.len()
    }

    pub fn check_list_count(&self) -> usize {
        self.check_lists.all_ids.len()
    }

    /// Read-only view of the checked relation.
    pub fn checked(&self) -> &CheckedRelation {
        &self.checked
    }
}

/// Free-function form of [`Store::new`].
pub fn new_store() -> Store {
    Store::new()
}
