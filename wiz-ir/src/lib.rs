//! Contract intermediate representation for wizgen.
//!
//! The IR is the single place where contract features accumulate. Feature
//! composers mutate a [`ContractBuilder`] through its public operations only;
//! every operation is idempotent or fails loudly, so two features that need
//! the same import, library or function merge instead of duplicating it.
//! Once composition is done the builder is frozen into an immutable
//! [`Contract`] that printers read.
//!
//! # Architecture
//!
//! ```text
//! options → composers → ContractBuilder (mutable) → Contract (frozen) → printer
//! ```

mod block;
mod contract;
mod error;
mod function;
mod import;
mod module;
mod variable;

pub use block::ImplBlock;
pub use contract::{Contract, ContractBuilder, DocTag};
pub use error::{DeclarationKind, Error, Result};
pub use function::{
    Argument, BaseFunction, Function, FunctionHandle, FunctionKind, FunctionSignature,
};
pub use import::{ImportOptions, ImportRef};
pub use module::{Initializer, Library, Module};
pub use variable::Variable;
pub use wizgen_core::Value;
