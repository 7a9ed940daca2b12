//! Ownable and role-based access control.

use wizgen_codegen::options::Access;
use wizgen_core::Value;
use wizgen_ir::{Argument, ContractBuilder, FunctionHandle, Result, Variable};

use crate::modules::{ACCESS_CONTROL, OWNABLE};

/// Include the access-control library and its constructor wiring.
pub fn setup(c: &mut ContractBuilder, access: Access) -> Result<()> {
    let upgradeable = c.is_upgradeable();
    match access {
        Access::Ownable => {
            c.add_library(
                OWNABLE.get(upgradeable),
                vec![Value::lit("initialOwner")],
                &[],
                true,
            )?;
            c.add_constructor_argument(Argument::new("initialOwner", "address"));
        }
        Access::Roles => {
            let first = c.add_library(ACCESS_CONTROL.get(upgradeable), vec![], &[], true)?;
            if first {
                c.add_constructor_argument(Argument::new("defaultAdmin", "address"));
                c.add_constructor_code("_grantRole(DEFAULT_ADMIN_ROLE, defaultAdmin)");
            }
        }
    }
    Ok(())
}

/// Restrict `function` to the owner, or to holders of `role`.
///
/// `role` is the upper-case role stem (`"MINTER"`). Under role-based access
/// the role constant and its grantee constructor argument are declared once.
pub fn require(
    c: &mut ContractBuilder,
    function: &FunctionHandle,
    access: Access,
    role: &str,
) -> Result<()> {
    setup(c, access)?;
    match access {
        Access::Ownable => c.add_guard(function, "onlyOwner"),
        Access::Roles => {
            let constant = grant_role(c, role)?;
            c.add_guard(function, &format!("onlyRole({constant})"))
        }
    }
}

/// Declare the `<ROLE>_ROLE` constant and grant it at deployment to a
/// constructor argument named after the role. Returns the constant's name.
///
/// Role-based access control must already be set up.
pub fn grant_role(c: &mut ContractBuilder, role: &str) -> Result<String> {
    let constant = format!("{role}_ROLE");
    let grantee = role.to_lowercase();
    let declared = c.add_constant(
        Variable::new(&constant, "bytes32").value(format!("keccak256(\"{constant}\")")),
    )?;
    if declared {
        c.add_constructor_argument(Argument::new(&grantee, "address"));
        c.add_constructor_code(format!("_grantRole({constant}, {grantee})"));
    }
    Ok(constant)
}

#[cfg(test)]
mod tests {
    use wizgen_ir::BaseFunction;

    use super::*;

    #[test]
    fn test_require_ownable_is_idempotent() {
        let mut c = ContractBuilder::new("MyToken");
        let h = c.add_function(&BaseFunction::new("pause")).unwrap();
        require(&mut c, &h, Access::Ownable, "PAUSER").unwrap();
        require(&mut c, &h, Access::Ownable, "PAUSER").unwrap();

        let contract = c.build();
        assert_eq!(contract.libraries().len(), 1);
        assert_eq!(contract.constructor_args().len(), 1);
        let guards: Vec<_> = contract.functions()[0].guards.iter().collect();
        assert_eq!(guards, vec!["onlyOwner"]);
    }

    #[test]
    fn test_require_roles_grants_each_role_once() {
        let mut c = ContractBuilder::new("MyToken");
        let pause = c.add_function(&BaseFunction::new("pause")).unwrap();
        let unpause = c.add_function(&BaseFunction::new("unpause")).unwrap();
        require(&mut c, &pause, Access::Roles, "PAUSER").unwrap();
        require(&mut c, &unpause, Access::Roles, "PAUSER").unwrap();

        let contract = c.build();
        assert_eq!(
            contract.constructor_code(),
            &[
                "_grantRole(DEFAULT_ADMIN_ROLE, defaultAdmin)".to_string(),
                "_grantRole(PAUSER_ROLE, pauser)".to_string(),
            ]
        );
        let args: Vec<_> = contract
            .constructor_args()
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(args, vec!["defaultAdmin", "pauser"]);
        assert_eq!(contract.constants().len(), 1);
        assert!(contract.functions()[1].guards.contains("onlyRole(PAUSER_ROLE)"));
    }
}
