use wizgen_codegen::options::Access;
use wizgen_ir::{Argument, BaseFunction, ContractBuilder, Result};

use super::access;
use crate::modules::{self, PAUSABLE};

fn assert_not_paused() -> BaseFunction {
    BaseFunction::new("assert_not_paused").module(PAUSABLE)
}

/// Include `Pausable`, expose `paused`/`pause`/`unpause` and stop each of
/// `guarded` while paused.
pub fn add(c: &mut ContractBuilder, access: Access, guarded: &[BaseFunction]) -> Result<()> {
    c.add_library(PAUSABLE, vec![], &[], false)?;
    for function in guarded {
        set_pausable(c, function)?;
    }

    let paused = modules::view(PAUSABLE, "paused")
        .returns(Argument::new("paused", "felt"))
        .parent_name("is_paused");
    modules::add(c, &paused)?;
    access::setup(c, access)?;

    for (name, call) in [("pause", "Pausable._pause()"), ("unpause", "Pausable._unpause()")] {
        let handle = modules::add(c, &modules::external(name))?;
        access::require(c, &handle, access, "PAUSER")?;
        c.set_function_body(&handle, vec![call.to_string()])?;
    }
    Ok(())
}

/// Make `function` fail while the contract is paused.
pub fn set_pausable(c: &mut ContractBuilder, function: &BaseFunction) -> Result<()> {
    let handle = modules::add(c, function)?;
    c.add_library_call(&assert_not_paused(), &handle)
}
