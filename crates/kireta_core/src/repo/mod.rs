//! Storage collaborators that sit outside the in-memory store.
//!
//! # Responsibility
//! - Persist accepted commands so a session can be rebuilt on next launch.
//! - Keep SQLite details out of the store and session layers.
//!
//! # Invariants
//! - Only commands already validated against the store are appended.
//! - Replay order equals append order.

pub mod journal_repo;
