//! Ownable and role-based access control.

use wizgen_codegen::options::Access;
use wizgen_ir::{Argument, BaseFunction, ContractBuilder, FunctionHandle, ImplBlock, Result};

use crate::modules::{self, ACCESS_CONTROL, OWNABLE, UTILS};

/// Include the access-control trait and set up its initial holder in the
/// constructor.
pub fn setup(c: &mut ContractBuilder, access: Access) -> Result<()> {
    match access {
        Access::Ownable => {
            let block = ImplBlock::new("Ownable").section(UTILS);
            if modules::add_trait_impl(c, OWNABLE, block, true)? {
                modules::namespace(c, OWNABLE, "ownable")?;
                modules::constructor_argument(c, Argument::new("owner", "Address"))?;
                modules::constructor_code(c, "ownable::set_owner(e, &owner)")?;
            }
        }
        Access::Roles => {
            let block = ImplBlock::new("AccessControl").section(UTILS);
            if modules::add_trait_impl(c, ACCESS_CONTROL, block, true)? {
                modules::namespace(c, ACCESS_CONTROL, "access_control")?;
                modules::constructor_argument(c, Argument::new("admin", "Address"))?;
                modules::constructor_code(c, "access_control::set_admin(e, &admin)")?;
            }
        }
    }
    Ok(())
}

/// Add the `caller` argument role checks read the account from.
pub fn with_caller(function: BaseFunction, access: Access) -> BaseFunction {
    match access {
        Access::Ownable => function,
        Access::Roles => function.arg("caller", "Address"),
    }
}

/// Grant `role` to a constructor argument of the same name, once.
pub fn grant_role(c: &mut ContractBuilder, role: &str) -> Result<()> {
    setup(c, Access::Roles)?;
    if c.add_interface_flag(&format!("role:{role}")) {
        modules::sdk(c, "Symbol")?;
        modules::constructor_argument(c, Argument::new(role, "Address"))?;
        modules::constructor_code(
            c,
            format!("access_control::grant_role_no_auth(e, &admin, &{role}, &Symbol::new(e, \"{role}\"))"),
        )?;
    }
    Ok(())
}

/// Restrict `function` to the owner, or to callers holding `role`.
///
/// `role` is the lower-case role name (`"minter"`). Under roles the function
/// must take a `caller` argument, see [`with_caller`].
pub fn require(
    c: &mut ContractBuilder,
    function: &FunctionHandle,
    access: Access,
    role: &str,
) -> Result<()> {
    setup(c, access)?;
    match access {
        Access::Ownable => {
            modules::use_macro(c, "only_owner")?;
            c.add_guard(function, "only_owner")
        }
        Access::Roles => {
            grant_role(c, role)?;
            modules::use_macro(c, "only_role")?;
            c.add_guard(function, &format!("only_role(caller, \"{role}\")"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ownable_sets_owner_once() {
        let mut c = ContractBuilder::new("MyToken");
        setup(&mut c, Access::Ownable).unwrap();
        setup(&mut c, Access::Ownable).unwrap();
        let contract = c.build();
        assert_eq!(contract.constructor_code(), &["ownable::set_owner(e, &owner)".to_string()]);
        assert_eq!(contract.constructor_args().len(), 1);
    }

    #[test]
    fn test_roles_grant_each_role_once() {
        let mut c = ContractBuilder::new("MyToken");
        let pause = modules::function("pause").arg("caller", "Address");
        let unpause = modules::function("unpause").arg("caller", "Address");
        let pause = modules::add_function(&mut c, &pause).unwrap();
        let unpause = modules::add_function(&mut c, &unpause).unwrap();
        require(&mut c, &pause, Access::Roles, "pauser").unwrap();
        require(&mut c, &unpause, Access::Roles, "pauser").unwrap();

        let contract = c.build();
        assert_eq!(
            contract.constructor_code(),
            &[
                "access_control::set_admin(e, &admin)".to_string(),
                "access_control::grant_role_no_auth(e, &admin, &pauser, &Symbol::new(e, \"pauser\"))"
                    .to_string(),
            ]
        );
        let args: Vec<_> = contract
            .constructor_args()
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(args, vec!["admin", "pauser"]);
        let guards: Vec<_> = contract.functions()[1].guards.iter().collect();
        assert_eq!(guards, vec!["only_role(caller, \"pauser\")"]);
    }

    #[test]
    fn test_with_caller() {
        let f = modules::function("mint").arg("amount", "i128");
        assert_eq!(with_caller(f.clone(), Access::Ownable).args.len(), 1);
        assert_eq!(with_caller(f, Access::Roles).args[1].name, "caller");
    }
}
