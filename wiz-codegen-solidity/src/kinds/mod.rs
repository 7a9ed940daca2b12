//! Contract kinds and their option records.

pub mod custom;
pub mod erc20;
pub mod erc721;
pub mod stablecoin;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use wizgen_codegen::enumerate::Blueprint;
use wizgen_ir::{BaseFunction, Contract, ContractBuilder, FunctionKind, ImplBlock, Result};

pub use custom::CustomOptions;
pub use erc20::{ClockMode, Erc20Options};
pub use erc721::Erc721Options;
pub use stablecoin::{Limitations, StablecoinOptions};

use crate::{features::Upgradeable, syntax::OVERRIDES_SECTION};

/// Name of the block holding functions that only resolve inheritance.
pub(crate) const OVERRIDES_BLOCK: &str = "overrides";

/// Options for one Solidity contract, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum SolidityOptions {
    #[serde(rename = "ERC20")]
    Erc20(Erc20Options),
    #[serde(rename = "ERC721")]
    Erc721(Erc721Options),
    Stablecoin(StablecoinOptions),
    Custom(CustomOptions),
}

impl SolidityOptions {
    pub const KINDS: &'static [&'static str] = &["ERC20", "ERC721", "Stablecoin", "Custom"];

    pub fn build(&self) -> Result<Contract> {
        match self {
            SolidityOptions::Erc20(opts) => erc20::build(opts),
            SolidityOptions::Erc721(opts) => erc721::build(opts),
            SolidityOptions::Stablecoin(opts) => stablecoin::build(opts),
            SolidityOptions::Custom(opts) => custom::build(opts),
        }
    }

    pub fn blueprint(kind: &str) -> Option<Blueprint> {
        match kind {
            "ERC20" => Some(erc20::blueprint()),
            "ERC721" => Some(erc721::blueprint()),
            "Stablecoin" => Some(stablecoin::blueprint()),
            "Custom" => Some(custom::blueprint()),
            _ => None,
        }
    }
}

/// Domain of the `upgradeable` option every kind shares.
pub(crate) fn upgradeable_values() -> [Value; 3] {
    [Value::Bool(false), "transparent".into(), "uups".into()]
}

/// Start a contract, flagging it upgradeable before any module is picked.
pub(crate) fn start(name: &str, upgradeable: Option<Upgradeable>) -> ContractBuilder {
    let mut c = ContractBuilder::new(&crate::NAMING.type_name(name));
    c.set_upgradeable(upgradeable.is_some());
    c
}

/// Declare a function in the overrides section and list its parents.
pub(crate) fn add_override(
    c: &mut ContractBuilder,
    function: BaseFunction,
    parents: &[&str],
) -> Result<()> {
    c.add_impl_block(ImplBlock::new(OVERRIDES_BLOCK).section(OVERRIDES_SECTION))?;
    let handle = c.add_function(&function.block(OVERRIDES_BLOCK))?;
    for parent in parents {
        c.add_override(&handle, parent)?;
    }
    Ok(())
}

pub(crate) fn supports_interface() -> BaseFunction {
    BaseFunction::new("supportsInterface")
        .arg("interfaceId", "bytes4")
        .returns(wizgen_ir::Argument::ret("bool"))
        .kind(FunctionKind::View)
}
