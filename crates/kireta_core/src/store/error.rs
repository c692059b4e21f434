use crate::model::date::DateString;
use crate::model::id::{CheckListId, ItemId};
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Integrity violations raised by command dispatch.
///
/// Normal flows never produce duplicate ids or dates, so callers should
/// treat these as programming errors rather than user-facing conditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("item id already exists: {0}")]
    DuplicateItemId(ItemId),
    #[error("check-list id already exists: {0}")]
    DuplicateCheckListId(CheckListId),
    #[error("check-list date already exists: {date} (held by {existing})")]
    DuplicateCheckListDate {
        date: DateString,
        existing: CheckListId,
    },
}
