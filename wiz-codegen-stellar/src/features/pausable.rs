use wizgen_codegen::options::Access;
use wizgen_ir::{Argument, BaseFunction, ContractBuilder, FunctionHandle, ImplBlock, Result};

use super::access;
use crate::modules::{self, PAUSABLE, UTILS};

const BLOCK: &str = "Pausable";

/// Implement `Pausable` for the contract, with `pause` and `unpause`
/// restricted by `access`.
pub fn add(c: &mut ContractBuilder, access: Access) -> Result<()> {
    let block = ImplBlock::new(BLOCK)
        .for_type(c.name())
        .section(UTILS)
        .attribute(modules::CONTRACT_IMPL);
    c.add_library(PAUSABLE, vec![], &[], false)?;
    modules::contract_impl(c)?;
    c.add_impl_block(block)?;
    modules::namespace(c, PAUSABLE, "pausable")?;

    let paused = modules::function("paused")
        .returns(Argument::ret("bool"))
        .block(BLOCK);
    let handle = modules::add_function(c, &paused)?;
    c.set_function_body(&handle, vec!["pausable::paused(e)".to_string()])?;

    for (name, call) in [("pause", "pausable::pause(e)"), ("unpause", "pausable::unpause(e)")] {
        let function = modules::function(name).arg("caller", "Address").block(BLOCK);
        let handle = modules::add_function(c, &function)?;
        access::require(c, &handle, access, "pauser")?;
        c.set_function_body(&handle, vec![call.to_string()])?;
    }
    Ok(())
}

/// Make `function` fail while the contract is paused.
pub fn set_pausable(c: &mut ContractBuilder, function: &FunctionHandle) -> Result<()> {
    modules::use_macro(c, "when_not_paused")?;
    c.add_guard(function, "when_not_paused")
}

/// Declare `function` and make it fail while paused.
pub fn add_pausable(c: &mut ContractBuilder, function: &BaseFunction) -> Result<FunctionHandle> {
    let handle = modules::add_function(c, function)?;
    set_pausable(c, &handle)?;
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use wizgen_codegen::printer::render;

    use super::*;
    use crate::StellarSyntax;

    #[test]
    fn test_pausable_trait_with_owner() {
        let mut c = ContractBuilder::new("MyContract");
        add(&mut c, Access::Ownable).unwrap();

        let text = render(&c.build(), &StellarSyntax::default());
        assert!(text.contains(
            "#[contractimpl]\nimpl Pausable for MyContract {\n    fn paused(e: &Env) -> bool {\n        pausable::paused(e)\n    }\n\n    #[only_owner]\n    fn pause(e: &Env, caller: Address) {\n        pausable::pause(e);\n    }\n"
        ));
        assert!(text.contains("use stellar_contract_utils::pausable::{Pausable, self as pausable};\n"));
    }

    #[test]
    fn test_set_pausable_imports_macro() {
        let mut c = ContractBuilder::new("MyContract");
        let handle = modules::add_function(&mut c, &modules::function("transfer")).unwrap();
        set_pausable(&mut c, &handle).unwrap();
        set_pausable(&mut c, &handle).unwrap();

        let contract = c.build();
        assert_eq!(contract.functions()[0].guards.len(), 1);
        assert!(
            contract
                .imports()
                .iter()
                .any(|i| i.path == "stellar_macros" && i.symbol == "when_not_paused")
        );
    }
}
