//! Core utilities and types for wizgen.
//!
//! This crate provides the leaf building blocks shared by the contract IR,
//! the printer and the per-ecosystem backends: identifier normalization,
//! argument values, version strings and generated-file output.

mod file;
mod utils;
mod value;
mod version;

// File operations
pub use file::{File, FileRules, Overwrite, WriteResult};
// String utilities
pub use utils::{
    escape_string, to_camel_case, to_identifier, to_pascal_case, to_snake_case,
    to_upper_snake_case,
};
// Argument values
pub use value::Value;
pub use version::Version;
