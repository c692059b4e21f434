//! Per-date check-list model.

use crate::model::date::DateString;
use crate::model::id::CheckListId;
use serde::{Deserialize, Serialize};

/// The checked items of one calendar date. At most one exists per date
/// inside a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckList {
    pub id: CheckListId,
    pub date: DateString,
}

impl CheckList {
    /// Creates a check-list with a freshly generated id.
    pub fn new(date: DateString) -> Self {
        Self::with_id(CheckListId::generate(), date)
    }

    /// Creates a check-list with a caller-provided id.
    pub fn with_id(id: impl Into<CheckListId>, date: DateString) -> Self {
        Self {
            id: id.into(),
            date,
        }
    }
}

/// Free-function form of [`CheckList::new`].
pub fn new_check_list(date: DateString) -> CheckList {
    CheckList::new(date)
}
