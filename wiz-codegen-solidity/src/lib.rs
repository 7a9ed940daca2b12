//! Solidity backend for wizgen.
//!
//! Generates OpenZeppelin Contracts based ERC-20, ERC-721, stablecoin and
//! custom contracts, and bundles every library file they transitively import.
//!
//! ```
//! use wizgen_codegen::generate;
//! use wizgen_codegen_solidity::{Erc20Options, Solidity, SolidityOptions};
//!
//! let options = SolidityOptions::Erc20(Erc20Options {
//!     pausable: true,
//!     ..Default::default()
//! });
//! let generated = generate(&Solidity, &options).unwrap();
//! assert_eq!(generated.file_name, "MyToken.sol");
//! assert!(generated.files.contains_key("@openzeppelin/contracts/access/Ownable.sol"));
//! ```

mod bundle;
pub mod features;
pub mod kinds;
#[cfg(test)]
mod lint;
pub mod modules;
mod sources;
mod syntax;

use wizgen_codegen::{
    Ecosystem,
    enumerate::Blueprint,
    naming::{NamingConvention, SOLIDITY_NAMING},
    printer::Syntax,
    resolve::LibrarySources,
};
use wizgen_ir::Contract;

pub use features::Upgradeable;
pub use kinds::{
    ClockMode, CustomOptions, Erc20Options, Erc721Options, Limitations, SolidityOptions,
    StablecoinOptions,
};
pub use sources::{imports_of, resolve_path};
pub use syntax::{CONTRACTS_VERSION, OVERRIDES_SECTION, PRAGMA, SoliditySyntax};

pub(crate) const NAMING: NamingConvention = SOLIDITY_NAMING;

static SYNTAX: SoliditySyntax = SoliditySyntax::new();

/// The Solidity ecosystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solidity;

impl Ecosystem for Solidity {
    type Options = SolidityOptions;

    fn name(&self) -> &'static str {
        "solidity"
    }

    fn kinds(&self) -> &'static [&'static str] {
        SolidityOptions::KINDS
    }

    fn blueprint(&self, kind: &str) -> Option<Blueprint> {
        SolidityOptions::blueprint(kind)
    }

    fn build(&self, options: &SolidityOptions) -> wizgen_ir::Result<Contract> {
        options.build()
    }

    fn syntax(&self) -> &dyn Syntax {
        &SYNTAX
    }

    fn file_name(&self, contract: &Contract) -> String {
        format!("{}.sol", NAMING.file_stem(contract.name()))
    }

    fn library_sources(&self) -> Option<&LibrarySources> {
        Some(sources::library())
    }

    fn extract_imports(&self, path: &str, source: &str) -> Vec<String> {
        imports_of(path, source)
    }
}
