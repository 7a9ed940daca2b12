//! Feature composers shared by the Solidity contract kinds.
//!
//! Each composer mutates the contract through the public builder API only.

pub mod access;
pub mod pausable;
pub mod upgradeable;

pub use upgradeable::Upgradeable;
