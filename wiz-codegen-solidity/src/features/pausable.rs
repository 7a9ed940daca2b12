use wizgen_codegen::options::Access;
use wizgen_ir::{BaseFunction, ContractBuilder, Result};

use super::access;
use crate::modules::ModulePair;

/// Inherit `extension` and expose guarded `pause`/`unpause`.
pub fn add(c: &mut ContractBuilder, extension: ModulePair, access: Access) -> Result<()> {
    let upgradeable = c.is_upgradeable();
    c.add_library(extension.get(upgradeable), vec![], &[], true)?;

    for (name, call) in [("pause", "_pause()"), ("unpause", "_unpause()")] {
        let handle = c.add_function(&BaseFunction::new(name))?;
        access::require(c, &handle, access, "PAUSER")?;
        c.set_function_body(&handle, vec![call.to_string()])?;
    }
    Ok(())
}
