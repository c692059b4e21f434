//! Domain model for the checklist catalog.
//!
//! # Responsibility
//! - Define items, per-date check-lists and their identifiers.
//! - Validate date text at construction so the store only sees valid keys.
//!
//! # Invariants
//! - Entities are identified by id, never by value or reference.
//! - Constructors are pure and touch no store.

pub mod check_list;
pub mod date;
pub mod id;
pub mod item;
