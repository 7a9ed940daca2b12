//! OpenZeppelin Contracts for Stylus, and the helpers composers use to
//! wire storage fields and functions into a contract.

use wizgen_ir::{
    Argument, BaseFunction, ContractBuilder, FunctionHandle, FunctionKind, ImportOptions, Module,
    Result, Variable,
};

pub const ERC20: Module = Module::new("Erc20", "openzeppelin_stylus::token::erc20");
pub const ERC20_METADATA: Module =
    Module::new("Erc20Metadata", "openzeppelin_stylus::token::erc20::extensions");
pub const ERC721: Module = Module::new("Erc721", "openzeppelin_stylus::token::erc721");
pub const PAUSABLE: Module = Module::new("Pausable", "openzeppelin_stylus::utils");
pub const OWNABLE: Module = Module::new("Ownable", "openzeppelin_stylus::access::ownable");
pub const ACCESS_CONTROL: Module =
    Module::new("AccessControl", "openzeppelin_stylus::access::control");

pub const PRELUDE: &str = "stylus_sdk::prelude";
pub const PRIMITIVES: &str = "stylus_sdk::alloy_primitives";
pub const ABI: &str = "stylus_sdk::abi";

pub const EXTENSIONS: &str = "Extensions";
pub const UTILS: &str = "Utils";

/// Return type of every state-changing function that can fail.
pub const UNIT_RESULT: &str = "Result<(), Vec<u8>>";

/// The attribute macros every contract uses.
pub fn prelude(c: &mut ContractBuilder) -> Result<()> {
    for name in ["entrypoint", "public", "storage"] {
        c.add_import(PRELUDE, name, ImportOptions::default())?;
    }
    Ok(())
}

/// Add `module` as a `#[borrow]` storage field named `field`.
///
/// The contract inherits the module's public functions. Returns `true` when
/// the field is new.
pub fn add_storage(c: &mut ContractBuilder, module: Module, field: &str) -> Result<bool> {
    let first = c.add_library(module, vec![], &[], false)?;
    c.add_variable(Variable::new(field, module.name))?;
    Ok(first)
}

/// Bring a trait into scope so its methods resolve on a storage field.
pub fn use_trait(c: &mut ContractBuilder, path: &str, name: &str) -> Result<()> {
    c.add_import(path, name, ImportOptions::default())
}

/// A public function taking `&mut self`.
pub fn function(name: &str) -> BaseFunction {
    BaseFunction::new(name).kind(FunctionKind::External)
}

/// A function that can fail and returns nothing else.
pub fn fallible(name: &str) -> BaseFunction {
    function(name).returns(Argument::ret(UNIT_RESULT))
}

/// Declare `function` and import the SDK types its signature names.
pub fn add_function(c: &mut ContractBuilder, function: &BaseFunction) -> Result<FunctionHandle> {
    let handle = c.add_function(function)?;
    for arg in &function.args {
        if let Some(ty) = arg.ty.as_deref() {
            import_type(c, ty)?;
        }
    }
    Ok(handle)
}

/// Call `call` on storage field `field`, converting its error.
pub fn forward(field: &str, call: &str) -> String {
    format!("self.{field}.{call}.map_err(|e| e.into())")
}

fn import_type(c: &mut ContractBuilder, ty: &str) -> Result<()> {
    match ty {
        "Address" | "U256" => c.add_import(PRIMITIVES, ty, ImportOptions::default()),
        "Bytes" => c.add_import(ABI, ty, ImportOptions::default()),
        _ => Ok(()),
    }
}
