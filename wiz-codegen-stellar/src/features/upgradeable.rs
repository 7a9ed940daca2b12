use wizgen_codegen::options::Access;
use wizgen_ir::{ContractBuilder, ImplBlock, Result};

use super::access;
use crate::modules::{self, UPGRADEABLE_INTERNAL};

const BLOCK: &str = "UpgradeableInternal";

/// Derive `Upgradeable` and authorize upgrades through `access`.
pub fn add(c: &mut ContractBuilder, access: Access) -> Result<()> {
    c.set_upgradeable(true);
    modules::use_macro(c, "Upgradeable")?;
    modules::add_trait_impl(c, UPGRADEABLE_INTERNAL, ImplBlock::new(BLOCK), false)?;
    access::setup(c, access)?;

    let (operator, body) = match access {
        Access::Ownable => ("_operator", vec!["ownable::enforce_owner_auth(e)".to_string()]),
        Access::Roles => {
            access::grant_role(c, "upgrader")?;
            (
                "operator",
                vec![
                    "access_control::ensure_role(e, operator, &Symbol::new(e, \"upgrader\"))"
                        .to_string(),
                    "operator.require_auth()".to_string(),
                ],
            )
        }
    };
    let require_auth = modules::function("_require_auth")
        .arg(operator, "&Address")
        .block(BLOCK);
    let handle = modules::add_function(c, &require_auth)?;
    c.set_function_body(&handle, body)
}
