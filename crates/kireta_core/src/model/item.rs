//! Catalog item model.

use crate::model::id::ItemId;
use serde::{Deserialize, Serialize};

/// A named, reusable catalog entry that can be checked on many dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Display name; the only field that changes after creation.
    pub name: String,
}

impl Item {
    /// Creates an item with a freshly generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(ItemId::generate(), name)
    }

    /// Creates an item with a caller-provided id (replay, import, fixtures).
    pub fn with_id(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Returns a copy of this item carrying `name`, keeping the id.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self::with_id(self.id.clone(), name)
    }
}

/// Free-function form of [`Item::new`].
pub fn new_item(name: impl Into<String>) -> Item {
    Item::new(name)
}
