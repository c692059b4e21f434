//! Flutter-facing bridge for kireta core.

pub mod api;
