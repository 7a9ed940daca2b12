//! OpenZeppelin Contracts for Cairo library modules, and the function
//! declarations every composer shares.

use wizgen_ir::{
    Argument, BaseFunction, ContractBuilder, FunctionHandle, FunctionKind, ImplBlock, Module,
    Result,
};

pub const ERC165: Module = Module::new("ERC165", "openzeppelin.introspection.erc165.library");
pub const ERC721: Module = Module::new("ERC721", "openzeppelin.token.erc721.library");
pub const PAUSABLE: Module = Module::new("Pausable", "openzeppelin.security.pausable.library");
pub const OWNABLE: Module = Module::new("Ownable", "openzeppelin.access.ownable.library");
pub const ACCESS_CONTROL: Module =
    Module::new("AccessControl", "openzeppelin.access.accesscontrol.library");
pub const PROXY: Module = Module::new("Proxy", "openzeppelin.upgrades.library").first();

/// Starkware builtins, imported by name rather than through a namespace.
pub const CAIRO_BUILTINS: Module =
    Module::new("cairo_builtins", "starkware.cairo.common.cairo_builtins").without_prefix();
pub const UINT256: Module = Module::new("uint256", "starkware.cairo.common.uint256").without_prefix();

pub const CONSTANTS_PATH: &str = "openzeppelin.utils.constants.library";

/// Block of `@view` functions.
pub const VIEWS: &str = "views";
/// Block of `@external` functions, printed after the views.
pub const EXTERNALS: &str = "externals";

/// Implicit arguments of every storage-touching function.
pub fn implicit_args() -> Vec<Argument> {
    vec![
        Argument::new("syscall_ptr", "felt*"),
        Argument::new("pedersen_ptr", "HashBuiltin*"),
        Argument::untyped("range_check_ptr"),
    ]
}

/// A `@view` function forwarding to `module`.
pub fn view(module: Module, name: &str) -> BaseFunction {
    BaseFunction {
        implicit_args: implicit_args(),
        block: Some(VIEWS.to_string()),
        ..BaseFunction::new(name)
            .module(module)
            .kind(FunctionKind::View)
            .passthrough()
    }
}

/// An `@external` function with a composed body.
pub fn external(name: &str) -> BaseFunction {
    BaseFunction {
        implicit_args: implicit_args(),
        block: Some(EXTERNALS.to_string()),
        ..BaseFunction::new(name).kind(FunctionKind::External)
    }
}

/// An `@external` function forwarding to `module`.
pub fn forwarded(module: Module, name: &str) -> BaseFunction {
    external(name).module(module).passthrough()
}

/// Declare `function`, creating the view and external blocks on first use.
pub fn add(c: &mut ContractBuilder, function: &BaseFunction) -> Result<FunctionHandle> {
    c.add_impl_block(ImplBlock::new(VIEWS).priority(1))?;
    c.add_impl_block(ImplBlock::new(EXTERNALS).priority(2))?;
    c.add_function(function)
}
