use wizgen_core::Value;
use wizgen_ir::{ContractBuilder, Result};

use crate::modules::{self, PROXY};

/// Deploy behind a proxy: initialize through `Proxy` and let the admin
/// replace the implementation.
pub fn add(c: &mut ContractBuilder) -> Result<()> {
    c.set_upgradeable(true);
    c.add_library(PROXY, vec![Value::lit("proxy_admin")], &[], true)?;
    c.add_constructor_argument(wizgen_ir::Argument::new("proxy_admin", "felt"));

    let upgrade = modules::external("upgrade").arg("new_implementation", "felt");
    let handle = modules::add(c, &upgrade)?;
    c.add_module_function(PROXY, "assert_only_admin")?;
    c.add_guard(&handle, "Proxy.assert_only_admin()")?;
    c.set_function_body(
        &handle,
        vec!["Proxy._set_implementation_hash(new_implementation)".to_string()],
    )
}
