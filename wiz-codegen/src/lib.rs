//! Shared code generation for wizgen.
//!
//! This crate holds everything that is common to all target ecosystems:
//!
//! - [`builder`] - Indented text building blocks (CodeBuilder, CodeFragment)
//! - [`printer`] - Renders a frozen [`Contract`](wizgen_ir::Contract) through a [`Syntax`](printer::Syntax)
//! - [`resolve`] - Transitive closure of library files a contract depends on
//! - [`enumerate`] - Cartesian product of option blueprints
//! - [`oracle`] - Structural checks over every enumerated option record
//! - [`naming`] - Reserved words per target language
//! - [`options`] - Option types shared by every ecosystem
//!
//! Target ecosystems implement [`Ecosystem`] and are driven through
//! [`generate`].

pub mod builder;
pub mod enumerate;
mod ecosystem;
mod error;
pub mod naming;
pub mod options;
pub mod oracle;
pub mod printer;
pub mod resolve;

pub use ecosystem::{Ecosystem, Generated, Target, generate};
pub use error::{Error, Result};
