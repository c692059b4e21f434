//! Use-case layer on top of the store.
//!
//! # Responsibility
//! - Own the session-scoped store and route commands through the journal.
//! - Compute the derived view data screens render.

pub mod session;
pub mod views;
