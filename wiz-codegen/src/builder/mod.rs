//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Renders fragments into indented text
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod fragment;
mod indent;

pub use code_builder::CodeBuilder;
pub use fragment::CodeFragment;
pub use indent::Indent;
