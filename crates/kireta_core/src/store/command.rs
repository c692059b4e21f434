//! Command dispatch: the only way to mutate a [`Store`].
//!
//! # Responsibility
//! - Define the tagged command set issued by view-models.
//! - Enforce id/date uniqueness before any table is touched.
//!
//! # Invariants
//! - A rejected command leaves the store unchanged.
//! - `SetChecked` accepts ids missing from the tables.
//! - `SetItem` upserts; `AddItem` rejects an existing id.

use crate::model::check_list::CheckList;
use crate::model::id::{CheckListId, ItemId};
use crate::model::item::Item;
use crate::store::{Store, StoreError, StoreResult};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Mutation request applied by [`handle`].
///
/// Serialized as `{"type": "addItem", "payload": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Command {
    #[serde(rename_all = "camelCase")]
    AddCheckList { check_list: CheckList },
    #[serde(rename_all = "camelCase")]
    AddItem { item: Item },
    #[serde(rename_all = "camelCase")]
    SetChecked {
        check_list_id: CheckListId,
        item_id: ItemId,
        checked: bool,
    },
    /// Rename an item. Unknown ids are inserted.
    #[serde(rename_all = "camelCase")]
    SetItem { item: Item },
}

impl Command {
    pub fn add_item(item: Item) -> Self {
        Self::AddItem { item }
    }

    pub fn add_check_list(check_list: CheckList) -> Self {
        Self::AddCheckList { check_list }
    }

    pub fn set_checked(check_list_id: CheckListId, item_id: ItemId, checked: bool) -> Self {
        Self::SetChecked {
            check_list_id,
            item_id,
            checked,
        }
    }

    pub fn set_item(item: Item) -> Self {
        Self::SetItem { item }
    }

    /// Wire tag of this command, also used as the journal `kind` column.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AddCheckList { .. } => "addCheckList",
            Self::AddItem { .. } => "addItem",
            Self::SetChecked { .. } => "setChecked",
            Self::SetItem { .. } => "setItem",
        }
    }
}

/// Checks whether `command` would be accepted, without mutating anything.
///
/// # Errors
/// - `DuplicateItemId` for `AddItem` with a known id.
/// - `DuplicateCheckListId` / `DuplicateCheckListDate` for `AddCheckList`.
pub fn validate_command(store: &Store, command: &Command) -> StoreResult<()> {
    match command {
        Command::AddItem { item } => {
            if store.items.contains(&item.id) {
                return Err(StoreError::DuplicateItemId(item.id.clone()));
            }
        }
        Command::AddCheckList { check_list } => {
            if store.check_lists.contains(&check_list.id) {
                return Err(StoreError::DuplicateCheckListId(check_list.id.clone()));
            }
            if let Some(existing) = store.check_lists.id_for_date(&check_list.date) {
                return Err(StoreError::DuplicateCheckListDate {
                    date: check_list.date,
                    existing: existing.clone(),
                });
            }
        }
        Command::SetChecked { .. } | Command::SetItem { .. } => {}
    }
    Ok(())
}

/// Applies exactly one command to `store`.
///
/// # Errors
/// Returns the integrity violation from [`validate_command`]; the store is
/// left untouched in that case.
pub fn handle(store: &mut Store, command: Command) -> StoreResult<()> {
    let kind = command.kind();
    if let Err(err) = validate_command(store, &command) {
        warn!("event=store_command module=store status=rejected command={kind} error={err}");
        return Err(err);
    }

    match command {
        Command::AddCheckList { check_list } => store.check_lists.insert(check_list),
        Command::AddItem { item } | Command::SetItem { item } => store.items.upsert(item),
        Command::SetChecked {
            check_list_id,
            item_id,
            checked,
        } => store.checked.set(&check_list_id, &item_id, checked),
    }

    debug!(
        "event=store_command module=store status=ok command={kind} items={} check_lists={}",
        store.item_count(),
        store.check_list_count()
    );
    Ok(())
}
