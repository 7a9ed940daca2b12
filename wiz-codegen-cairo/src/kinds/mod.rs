//! Contract kinds and their option records.

pub mod custom;
pub mod erc721;

use serde::{Deserialize, Serialize};
use wizgen_codegen::enumerate::Blueprint;
use wizgen_ir::{Contract, ContractBuilder, Result};

pub use custom::CustomOptions;
pub use erc721::Erc721Options;

use crate::modules::CAIRO_BUILTINS;

/// Options for one Cairo contract, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum CairoOptions {
    #[serde(rename = "ERC721")]
    Erc721(Erc721Options),
    Custom(CustomOptions),
}

impl CairoOptions {
    pub const KINDS: &'static [&'static str] = &["ERC721", "Custom"];

    pub fn build(&self) -> Result<Contract> {
        match self {
            CairoOptions::Erc721(opts) => erc721::build(opts),
            CairoOptions::Custom(opts) => custom::build(opts),
        }
    }

    pub fn blueprint(kind: &str) -> Option<Blueprint> {
        match kind {
            "ERC721" => Some(erc721::blueprint()),
            "Custom" => Some(custom::blueprint()),
            _ => None,
        }
    }
}

/// Start a contract with the builtins every function signature refers to.
pub(crate) fn start(name: &str, upgradeable: bool) -> Result<ContractBuilder> {
    let mut c = ContractBuilder::new(&crate::NAMING.type_name(name));
    c.set_upgradeable(upgradeable);
    c.add_library(CAIRO_BUILTINS, vec![], &["HashBuiltin"], false)?;
    Ok(c)
}
