//! Ownable and role-based access control.

use wizgen_codegen::options::Access;
use wizgen_core::Value;
use wizgen_ir::{Argument, ContractBuilder, FunctionHandle, ImportOptions, Result, Variable};

use crate::modules::{self, ACCESS_CONTROL, CONSTANTS_PATH, OWNABLE};

/// Include the access-control library, its initializer wiring and the
/// functions it exposes.
pub fn setup(c: &mut ContractBuilder, access: Access) -> Result<()> {
    match access {
        Access::Ownable => {
            let first = c.add_library(OWNABLE, vec![Value::lit("owner")], &[], true)?;
            if first {
                c.add_constructor_argument(Argument::new("owner", "felt"));
                let owner = modules::view(OWNABLE, "owner").returns(Argument::new("owner", "felt"));
                modules::add(c, &owner)?;
                let transfer = modules::forwarded(OWNABLE, "transferOwnership")
                    .arg("newOwner", "felt")
                    .parent_name("transfer_ownership");
                modules::add(c, &transfer)?;
                let renounce = modules::forwarded(OWNABLE, "renounceOwnership")
                    .parent_name("renounce_ownership");
                modules::add(c, &renounce)?;
            }
        }
        Access::Roles => {
            let first = c.add_library(ACCESS_CONTROL, vec![], &[], true)?;
            if first {
                c.add_import(CONSTANTS_PATH, "DEFAULT_ADMIN_ROLE", ImportOptions::default())?;
                c.add_constructor_argument(Argument::new("admin", "felt"));
                c.add_constructor_code("AccessControl._grant_role(DEFAULT_ADMIN_ROLE, admin)");

                let has_role = modules::view(ACCESS_CONTROL, "hasRole")
                    .arg("role", "felt")
                    .arg("user", "felt")
                    .returns(Argument::new("has_role", "felt"))
                    .parent_name("has_role");
                modules::add(c, &has_role)?;
                let role_admin = modules::view(ACCESS_CONTROL, "getRoleAdmin")
                    .arg("role", "felt")
                    .returns(Argument::new("admin", "felt"))
                    .parent_name("get_role_admin");
                modules::add(c, &role_admin)?;
                for (name, parent) in [
                    ("grantRole", "grant_role"),
                    ("revokeRole", "revoke_role"),
                    ("renounceRole", "renounce_role"),
                ] {
                    let f = modules::forwarded(ACCESS_CONTROL, name)
                        .arg("role", "felt")
                        .arg("user", "felt")
                        .parent_name(parent);
                    modules::add(c, &f)?;
                }
            }
        }
    }
    Ok(())
}

/// Restrict `function` to the owner, or to holders of `role`.
///
/// `role` is the upper-case role stem (`"MINTER"`). The check is the first
/// statement of the function body.
pub fn require(
    c: &mut ContractBuilder,
    function: &FunctionHandle,
    access: Access,
    role: &str,
) -> Result<()> {
    setup(c, access)?;
    match access {
        Access::Ownable => {
            c.add_module_function(OWNABLE, "assert_only_owner")?;
            c.add_guard(function, "Ownable.assert_only_owner()")
        }
        Access::Roles => {
            let constant = format!("{role}_ROLE");
            let grantee = role.to_lowercase();
            let declared =
                c.add_constant(Variable::new(&constant, "felt").value(format!("'{constant}'")))?;
            if declared {
                c.add_constructor_argument(Argument::new(&grantee, "felt"));
                c.add_constructor_code(format!("AccessControl._grant_role({constant}, {grantee})"));
            }
            c.add_module_function(ACCESS_CONTROL, "assert_only_role")?;
            c.add_guard(function, &format!("AccessControl.assert_only_role({constant})"))
        }
    }
}
