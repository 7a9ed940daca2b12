//! Contract kinds and their option records.

pub mod erc20;
pub mod erc721;

use serde::{Deserialize, Serialize};
use wizgen_codegen::enumerate::Blueprint;
use wizgen_ir::{Contract, ContractBuilder, Result};

pub use erc20::Erc20Options;
pub use erc721::Erc721Options;

use crate::modules;

/// Options for one Stylus contract, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum StylusOptions {
    #[serde(rename = "ERC20")]
    Erc20(Erc20Options),
    #[serde(rename = "ERC721")]
    Erc721(Erc721Options),
}

impl StylusOptions {
    pub const KINDS: &'static [&'static str] = &["ERC20", "ERC721"];

    pub fn build(&self) -> Result<Contract> {
        match self {
            StylusOptions::Erc20(opts) => erc20::build(opts),
            StylusOptions::Erc721(opts) => erc721::build(opts),
        }
    }

    pub fn blueprint(kind: &str) -> Option<Blueprint> {
        match kind {
            "ERC20" => Some(erc20::blueprint()),
            "ERC721" => Some(erc721::blueprint()),
            _ => None,
        }
    }
}

pub(crate) fn start(name: &str) -> Result<ContractBuilder> {
    let mut c = ContractBuilder::new(&crate::NAMING.type_name(name));
    modules::prelude(&mut c)?;
    Ok(c)
}
