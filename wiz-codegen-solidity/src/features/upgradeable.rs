//! Proxy upgradeability.

use serde::{Deserialize, Serialize};
use wizgen_codegen::options::Access;
use wizgen_ir::{BaseFunction, ContractBuilder, FunctionKind, Result};

use super::access;
use crate::modules::{INITIALIZABLE, UUPS_UPGRADEABLE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Upgradeable {
    Transparent,
    Uups,
}

fn authorize_upgrade() -> BaseFunction {
    BaseFunction::new("_authorizeUpgrade")
        .arg("newImplementation", "address")
        .kind(FunctionKind::Internal)
}

/// Make the contract initializable, and self-upgrading under UUPS.
///
/// Must run after every composer that picks between plain and upgradeable
/// modules; [`ContractBuilder::is_upgradeable`] is set by the caller before
/// any of them.
pub fn add(c: &mut ContractBuilder, upgradeable: Upgradeable, access: Access) -> Result<()> {
    c.add_library(INITIALIZABLE, vec![], &[], false)?;
    if upgradeable == Upgradeable::Uups {
        c.add_library(UUPS_UPGRADEABLE, vec![], &[], true)?;
        let handle = c.add_function(&authorize_upgrade())?;
        c.add_override(&handle, UUPS_UPGRADEABLE.name)?;
        access::require(c, &handle, access, "UPGRADER")?;
        c.set_function_body(&handle, Vec::new())?;
    }
    Ok(())
}
