//! Opaque identifiers for catalog items and check-lists.
//!
//! # Responsibility
//! - Generate globally unique identifiers for newly created entities.
//! - Keep item ids and check-list ids as distinct types in signatures.
//!
//! # Invariants
//! - Generated ids are random v4 UUIDs (122 bits of entropy).
//! - Ids are compared and hashed by their exact text; no normalization.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Returns a fresh identifier in hyphenated UUID form.
///
/// Never fails. Two calls within one process never return the same value
/// in practice.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Allocates a fresh random id.
            pub fn generate() -> Self {
                Self(new_id())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

opaque_id!(
    /// Stable identifier of a catalog [`Item`](crate::model::item::Item).
    ItemId
);

opaque_id!(
    /// Stable identifier of a [`CheckList`](crate::model::check_list::CheckList).
    CheckListId
);
