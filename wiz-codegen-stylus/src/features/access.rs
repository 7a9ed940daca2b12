//! Ownable and role-based access control.
//!
//! Stylus contracts have no constructor here, so the owner or admin is set
//! when the contract is initialized after deployment.

use wizgen_codegen::options::Access;
use wizgen_ir::{ContractBuilder, FunctionHandle, Result, Variable};

use crate::modules::{self, ACCESS_CONTROL, OWNABLE};

/// Include the storage field the access checks read.
pub fn setup(c: &mut ContractBuilder, access: Access) -> Result<()> {
    match access {
        Access::Ownable => modules::add_storage(c, OWNABLE, "ownable")?,
        Access::Roles => modules::add_storage(c, ACCESS_CONTROL, "access")?,
    };
    Ok(())
}

/// Declare the `<ROLE>_ROLE` identifier and return its name.
pub fn role_constant(c: &mut ContractBuilder, role: &str) -> Result<String> {
    let name = format!("{}_ROLE", role.to_uppercase());
    let value = format!("keccak_const::Keccak256::new().update(b\"{name}\").finalize()");
    c.add_constant(Variable::new(&name, "[u8; 32]").value(value))?;
    Ok(name)
}

/// Restrict `function` to the owner, or to accounts holding `role`.
pub fn require(
    c: &mut ContractBuilder,
    function: &FunctionHandle,
    access: Access,
    role: &str,
) -> Result<()> {
    setup(c, access)?;
    match access {
        Access::Ownable => c.add_function_code_before(function, "self.ownable.only_owner()?"),
        Access::Roles => {
            let constant = role_constant(c, role)?;
            c.add_function_code_before(function, format!("self.access.only_role({constant}.into())?"))
        }
    }
}
