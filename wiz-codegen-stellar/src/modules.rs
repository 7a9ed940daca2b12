//! OpenZeppelin Stellar Soroban crates, and the helpers composers use to
//! wire traits and functions into a contract.

use wizgen_ir::{
    Argument, BaseFunction, ContractBuilder, FunctionHandle, FunctionKind, ImplBlock,
    ImportOptions, Module, Result,
};

pub const BASE: Module = Module::new("Base", "stellar_tokens::fungible");
pub const FUNGIBLE_TOKEN: Module = Module::new("FungibleToken", "stellar_tokens::fungible");
pub const FUNGIBLE_BURNABLE: Module =
    Module::new("burnable::FungibleBurnable", "stellar_tokens::fungible");
pub const PAUSABLE: Module = Module::new("Pausable", "stellar_contract_utils::pausable");
pub const OWNABLE: Module = Module::new("Ownable", "stellar_access::ownable");
pub const ACCESS_CONTROL: Module = Module::new("AccessControl", "stellar_access::access_control");
pub const UPGRADEABLE_INTERNAL: Module =
    Module::new("UpgradeableInternal", "stellar_contract_utils::upgradeable");

pub const SOROBAN_SDK: &str = "soroban_sdk";
pub const MACROS: &str = "stellar_macros";

/// Forwards every trait method to the contract type's default.
pub const DEFAULT_IMPL: &str = "#[default_impl]";
pub const CONTRACT_IMPL: &str = "#[contractimpl]";

pub const EXTENSIONS: &str = "Extensions";
pub const UTILS: &str = "Utils";

/// Import `symbol` from the Soroban SDK.
pub fn sdk(c: &mut ContractBuilder, symbol: &str) -> Result<()> {
    c.add_import(SOROBAN_SDK, symbol, ImportOptions::default())
}

/// Import an attribute or derive macro.
pub fn use_macro(c: &mut ContractBuilder, name: &str) -> Result<()> {
    c.add_import(MACROS, name, ImportOptions::default())
}

/// Import `module`'s path itself under `alias`, for free functions such as
/// `pausable::pause(e)`.
pub fn namespace(c: &mut ContractBuilder, module: Module, alias: &str) -> Result<()> {
    c.add_import(module.path, "self", ImportOptions::default().alias(alias))
}

/// Imports every `#[contractimpl]` block needs.
pub fn contract_impl(c: &mut ContractBuilder) -> Result<()> {
    sdk(c, "contractimpl")?;
    sdk(c, "Env")
}

/// Implement `module`'s trait for the contract in its own block.
///
/// Exposed traits are annotated `#[contractimpl]`; traits left to their
/// defaults also get `#[default_impl]`.
pub fn add_trait_impl(
    c: &mut ContractBuilder,
    module: Module,
    block: ImplBlock,
    exposed: bool,
) -> Result<bool> {
    c.add_library(module, vec![], &[], false)?;
    let mut block = block.for_type(c.name());
    if exposed {
        contract_impl(c)?;
        use_macro(c, "default_impl")?;
        block = block.attribute(DEFAULT_IMPL).attribute(CONTRACT_IMPL);
    } else {
        sdk(c, "Env")?;
    }
    c.add_impl_block(block)
}

/// A contract function taking the environment first.
pub fn function(name: &str) -> BaseFunction {
    BaseFunction {
        implicit_args: vec![Argument::new("e", "&Env")],
        ..BaseFunction::new(name).kind(FunctionKind::External)
    }
}

/// Declare `function`. Functions outside trait blocks make the contract's
/// own `#[contractimpl]` block appear.
pub fn add_function(c: &mut ContractBuilder, function: &BaseFunction) -> Result<FunctionHandle> {
    if function.block.is_none() {
        contract_impl(c)?;
    }
    let handle = c.add_function(function)?;
    for arg in &function.args {
        if let Some(ty) = arg.ty.as_deref() {
            import_type(c, ty)?;
        }
    }
    if let Some(ret) = function.returns.first().and_then(|r| r.ty.as_deref()) {
        import_type(c, ret)?;
    }
    Ok(handle)
}

/// Append a statement to `__constructor`.
pub fn constructor_code(c: &mut ContractBuilder, line: impl Into<String>) -> Result<()> {
    contract_impl(c)?;
    c.add_constructor_code(line);
    Ok(())
}

pub fn constructor_argument(c: &mut ContractBuilder, arg: Argument) -> Result<()> {
    if let Some(ty) = arg.ty.as_deref() {
        import_type(c, ty)?;
    }
    c.add_constructor_argument(arg);
    Ok(())
}

/// SDK types that have to be brought into scope by name.
fn import_type(c: &mut ContractBuilder, ty: &str) -> Result<()> {
    let ty = ty.trim_start_matches('&');
    match ty {
        "Address" | "String" | "Symbol" => sdk(c, ty),
        _ => Ok(()),
    }
}
