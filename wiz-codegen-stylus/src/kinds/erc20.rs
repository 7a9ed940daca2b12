//! ERC-20 token on the `openzeppelin_stylus` base implementation.

use serde::{Deserialize, Serialize};
use wizgen_codegen::{
    enumerate::Blueprint,
    options::{Access, Info, false_or},
};
use wizgen_ir::{Argument, BaseFunction, Contract, ContractBuilder, ImplBlock, Result};

use super::start;
use crate::{
    features::{access, pausable},
    modules::{self, ERC20, ERC20_METADATA, EXTENSIONS},
};

const BURNABLE_BLOCK: &str = "Burnable";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Erc20Options {
    pub name: String,
    pub burnable: bool,
    pub pausable: bool,
    pub mintable: bool,
    #[serde(with = "false_or")]
    pub access: Option<Access>,
    pub info: Info,
}

impl Default for Erc20Options {
    fn default() -> Self {
        Self {
            name: "MyToken".to_string(),
            burnable: false,
            pausable: false,
            mintable: false,
            access: None,
            info: Info::default(),
        }
    }
}

pub fn blueprint() -> Blueprint {
    Blueprint::new()
        .values("kind", ["ERC20"])
        .values("name", ["MyToken"])
        .toggle("burnable")
        .toggle("pausable")
        .toggle("mintable")
        .values("access", Access::values())
        .nested("info", Blueprint::new().values("license", ["MIT"]))
}

/// Transfers that stop while paused.
fn transfers() -> [(BaseFunction, &'static str); 2] {
    let ok = || Argument::ret("Result<bool, Vec<u8>>");
    [
        (
            modules::function("transfer")
                .arg("to", "Address")
                .arg("value", "U256")
                .returns(ok()),
            "transfer(to, value)",
        ),
        (
            modules::function("transfer_from")
                .arg("from", "Address")
                .arg("to", "Address")
                .arg("value", "U256")
                .returns(ok()),
            "transfer_from(from, to, value)",
        ),
    ]
}

fn burns() -> [(BaseFunction, &'static str); 2] {
    [
        (
            modules::fallible("burn").arg("value", "U256"),
            "burn(value)",
        ),
        (
            modules::fallible("burn_from")
                .arg("account", "Address")
                .arg("value", "U256"),
            "burn_from(account, value)",
        ),
    ]
}

/// Declare `function` forwarding to the `erc20` field, checked for pause
/// when `paused` is set.
fn add_forwarded(
    c: &mut ContractBuilder,
    function: BaseFunction,
    call: &str,
    paused: bool,
) -> Result<()> {
    let handle = modules::add_function(c, &function)?;
    if paused {
        pausable::set_pausable(c, &handle)?;
    }
    c.set_function_body(&handle, vec![modules::forward("erc20", call)])
}

pub fn build(opts: &Erc20Options) -> Result<Contract> {
    let mut c = start(&opts.name)?;
    let access = Access::effective(opts.access, opts.pausable || opts.mintable);

    modules::add_storage(&mut c, ERC20, "erc20")?;
    modules::add_storage(&mut c, ERC20_METADATA, "metadata")?;

    if opts.pausable {
        pausable::add(&mut c, Access::required(access))?;
        modules::use_trait(&mut c, ERC20.path, "IErc20")?;
        for (function, call) in transfers() {
            add_forwarded(&mut c, function, call, true)?;
        }
    }

    if opts.burnable {
        c.add_impl_block(ImplBlock::new(BURNABLE_BLOCK).section(EXTENSIONS))?;
        modules::use_trait(&mut c, ERC20_METADATA.path, "IErc20Burnable")?;
        for (function, call) in burns() {
            add_forwarded(&mut c, function.block(BURNABLE_BLOCK), call, opts.pausable)?;
        }
    }

    if opts.mintable {
        let mint = modules::fallible("mint")
            .arg("account", "Address")
            .arg("value", "U256");
        let handle = modules::add_function(&mut c, &mint)?;
        if opts.pausable {
            pausable::set_pausable(&mut c, &handle)?;
        }
        access::require(&mut c, &handle, Access::required(access), "minter")?;
        c.set_function_body(&handle, vec![modules::forward("erc20", "_mint(account, value)")])?;
    }

    if let Some(access) = access {
        access::setup(&mut c, access)?;
    }
    opts.info.apply(&mut c);
    Ok(c.build())
}
