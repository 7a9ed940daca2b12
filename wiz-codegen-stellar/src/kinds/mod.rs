//! Contract kinds and their option records.

pub mod custom;
pub mod fungible;

use serde::{Deserialize, Serialize};
use wizgen_codegen::{enumerate::Blueprint, options::Info};
use wizgen_ir::{Contract, ContractBuilder, Result};

pub use custom::CustomOptions;
pub use fungible::FungibleOptions;

use crate::modules;

/// Options for one Soroban contract, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum StellarOptions {
    Fungible(FungibleOptions),
    Custom(CustomOptions),
}

impl StellarOptions {
    pub const KINDS: &'static [&'static str] = &["Fungible", "Custom"];

    pub fn build(&self) -> Result<Contract> {
        match self {
            StellarOptions::Fungible(opts) => fungible::build(opts),
            StellarOptions::Custom(opts) => custom::build(opts),
        }
    }

    pub fn blueprint(kind: &str) -> Option<Blueprint> {
        match kind {
            "Fungible" => Some(fungible::blueprint()),
            "Custom" => Some(custom::blueprint()),
            _ => None,
        }
    }
}

pub(crate) fn start(name: &str) -> Result<ContractBuilder> {
    let mut c = ContractBuilder::new(&crate::NAMING.type_name(name));
    modules::sdk(&mut c, "contract")?;
    Ok(c)
}

/// Record contract metadata; the security contact is published with
/// `contractmeta!`.
pub(crate) fn apply_info(c: &mut ContractBuilder, info: &Info) -> Result<()> {
    if info.security_contact.as_deref().is_some_and(|s| !s.is_empty()) {
        modules::sdk(c, "contractmeta")?;
    }
    info.apply(c);
    Ok(())
}
