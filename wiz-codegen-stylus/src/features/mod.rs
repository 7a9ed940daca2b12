//! Cross-cutting features shared by every contract kind.

pub mod access;
pub mod pausable;
