use wizgen_codegen::options::Access;
use wizgen_ir::{ContractBuilder, FunctionHandle, ImplBlock, Result};

use super::access;
use crate::modules::{self, PAUSABLE, UTILS};

const BLOCK: &str = "Pausable";

/// Borrow `Pausable` and expose `pause` and `unpause`, restricted by
/// `access`.
pub fn add(c: &mut ContractBuilder, access: Access) -> Result<()> {
    modules::add_storage(c, PAUSABLE, "pausable")?;
    c.add_impl_block(ImplBlock::new(BLOCK).section(UTILS))?;

    for name in ["pause", "unpause"] {
        let function = modules::fallible(name).block(BLOCK);
        let handle = modules::add_function(c, &function)?;
        access::require(c, &handle, access, "pauser")?;
        c.set_function_body(&handle, vec![modules::forward("pausable", &format!("{name}()"))])?;
    }
    Ok(())
}

/// Make `function` fail while the contract is paused.
pub fn set_pausable(c: &mut ContractBuilder, function: &FunctionHandle) -> Result<()> {
    c.add_function_code_before(function, "self.pausable.when_not_paused()?")
}
