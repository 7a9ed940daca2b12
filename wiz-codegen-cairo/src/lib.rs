//! Cairo backend for wizgen.
//!
//! Generates Cairo 0.10 contracts on top of OpenZeppelin Contracts for
//! Cairo. The library is installed as a package, so only the contract file
//! is produced.
//!
//! ```
//! use wizgen_codegen::generate;
//! use wizgen_codegen_cairo::{Cairo, CairoOptions, Erc721Options};
//!
//! let options = CairoOptions::Erc721(Erc721Options {
//!     pausable: true,
//!     ..Default::default()
//! });
//! let generated = generate(&Cairo, &options).unwrap();
//! assert_eq!(generated.file_name, "my_token.cairo");
//! assert!(generated.source().contains("Pausable.assert_not_paused();"));
//! ```

pub mod features;
pub mod kinds;
pub mod modules;
mod syntax;

use wizgen_codegen::{
    Ecosystem,
    enumerate::Blueprint,
    naming::{CAIRO_NAMING, NamingConvention},
    printer::Syntax,
};
use wizgen_ir::Contract;

pub use kinds::{CairoOptions, CustomOptions, Erc721Options};
pub use syntax::{CONTRACTS_VERSION, CairoSyntax};

pub(crate) const NAMING: NamingConvention = CAIRO_NAMING;

static SYNTAX: CairoSyntax = CairoSyntax::new();

/// The Cairo ecosystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cairo;

impl Ecosystem for Cairo {
    type Options = CairoOptions;

    fn name(&self) -> &'static str {
        "cairo"
    }

    fn kinds(&self) -> &'static [&'static str] {
        CairoOptions::KINDS
    }

    fn blueprint(&self, kind: &str) -> Option<Blueprint> {
        CairoOptions::blueprint(kind)
    }

    fn build(&self, options: &CairoOptions) -> wizgen_ir::Result<Contract> {
        options.build()
    }

    fn syntax(&self) -> &dyn Syntax {
        &SYNTAX
    }

    fn file_name(&self, contract: &Contract) -> String {
        format!("{}.cairo", NAMING.file_stem(contract.name()))
    }
}
