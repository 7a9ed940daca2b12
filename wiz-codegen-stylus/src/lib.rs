//! Arbitrum Stylus backend for wizgen.
//!
//! Generates Rust contracts for the Stylus SDK on top of OpenZeppelin
//! Contracts for Stylus. Every library is a storage field the contract
//! borrows from and inherits, so only the contract file is produced.
//!
//! ```
//! use wizgen_codegen::generate;
//! use wizgen_codegen_stylus::{Erc20Options, Stylus, StylusOptions};
//!
//! let options = StylusOptions::Erc20(Erc20Options {
//!     burnable: true,
//!     ..Default::default()
//! });
//! let generated = generate(&Stylus, &options).unwrap();
//! assert_eq!(generated.file_name, "my_token.rs");
//! assert!(generated.source().contains("#[inherit(Erc20, Erc20Metadata)]"));
//! ```

pub mod features;
pub mod kinds;
pub mod modules;
mod syntax;

use wizgen_codegen::{
    Ecosystem,
    enumerate::Blueprint,
    naming::{NamingConvention, RUST_NAMING},
    printer::Syntax,
};
use wizgen_ir::Contract;

pub use kinds::{Erc20Options, Erc721Options, StylusOptions};
pub use syntax::{CONTRACTS_VERSION, StylusSyntax};

pub(crate) const NAMING: NamingConvention = RUST_NAMING;

static SYNTAX: StylusSyntax = StylusSyntax::new();

/// The Arbitrum Stylus ecosystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stylus;

impl Ecosystem for Stylus {
    type Options = StylusOptions;

    fn name(&self) -> &'static str {
        "stylus"
    }

    fn kinds(&self) -> &'static [&'static str] {
        StylusOptions::KINDS
    }

    fn blueprint(&self, kind: &str) -> Option<Blueprint> {
        StylusOptions::blueprint(kind)
    }

    fn build(&self, options: &StylusOptions) -> wizgen_ir::Result<Contract> {
        options.build()
    }

    fn syntax(&self) -> &dyn Syntax {
        &SYNTAX
    }

    fn file_name(&self, contract: &Contract) -> String {
        format!("{}.rs", NAMING.file_stem(contract.name()))
    }
}
