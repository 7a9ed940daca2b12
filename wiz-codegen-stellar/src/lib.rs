//! Stellar Soroban backend for wizgen.
//!
//! Generates Soroban contracts on top of OpenZeppelin Stellar Soroban
//! Contracts. The libraries are crates, so only the contract file is
//! produced.
//!
//! ```
//! use wizgen_codegen::generate;
//! use wizgen_codegen_stellar::{FungibleOptions, Stellar, StellarOptions};
//!
//! let options = StellarOptions::Fungible(FungibleOptions {
//!     mintable: true,
//!     ..Default::default()
//! });
//! let generated = generate(&Stellar, &options).unwrap();
//! assert_eq!(generated.file_name, "my_token.rs");
//! assert!(generated.source().contains("#[only_owner]"));
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

pub use kinds::{CustomOptions, FungibleOptions, StellarOptions};
pub use syntax::{CONTRACTS_VERSION, StellarSyntax};

pub(crate) const NAMING: NamingConvention = RUST_NAMING;

static SYNTAX: StellarSyntax = StellarSyntax::new();

/// The Stellar Soroban ecosystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stellar;

impl Ecosystem for Stellar {
    type Options = StellarOptions;

    fn name(&self) -> &'static str {
        "stellar"
    }

    fn kinds(&self) -> &'static [&'static str] {
        StellarOptions::KINDS
    }

    fn blueprint(&self, kind: &str) -> Option<Blueprint> {
        StellarOptions::blueprint(kind)
    }

    fn build(&self, options: &StellarOptions) -> wizgen_ir::Result<Contract> {
        options.build()
    }

    fn syntax(&self) -> &dyn Syntax {
        &SYNTAX
    }

    fn file_name(&self, contract: &Contract) -> String {
        format!("{}.rs", NAMING.file_stem(contract.name()))
    }
}
