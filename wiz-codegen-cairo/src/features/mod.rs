//! Cross-cutting features shared by every Cairo contract kind.

pub mod access;
pub mod pausable;
pub mod upgradeable;
