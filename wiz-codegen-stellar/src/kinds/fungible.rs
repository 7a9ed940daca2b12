//! Fungible token on the `stellar_tokens` base implementation.

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;
use wizgen_codegen::{
    enumerate::Blueprint,
    options::{Access, Info, false_or},
};
use wizgen_core::escape_string;
use wizgen_ir::{Argument, BaseFunction, Contract, ContractBuilder, ImplBlock, Result, Variable};

use super::{apply_info, start};
use crate::{
    features::{access, pausable, upgradeable},
    modules::{self, BASE, EXTENSIONS, FUNGIBLE_BURNABLE, FUNGIBLE_TOKEN},
};

/// Decimals of every generated token.
pub const DECIMALS: u32 = 18;

const TOKEN_BLOCK: &str = "FungibleToken";
const BURNABLE_BLOCK: &str = "FungibleBurnable";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FungibleOptions {
    pub name: String,
    pub symbol: String,
    pub burnable: bool,
    pub pausable: bool,
    pub mintable: bool,
    /// Whole tokens minted to the `recipient` constructor argument.
    pub premint: Option<u64>,
    #[serde(with = "false_or")]
    pub access: Option<Access>,
    pub upgradeable: bool,
    pub info: Info,
}

impl Default for FungibleOptions {
    fn default() -> Self {
        Self {
            name: "MyToken".to_string(),
            symbol: "MTK".to_string(),
            burnable: false,
            pausable: false,
            mintable: false,
            premint: None,
            access: None,
            upgradeable: false,
            info: Info::default(),
        }
    }
}

impl FungibleOptions {
    fn requires_access(&self) -> bool {
        self.pausable || self.mintable || self.upgradeable
    }
}

pub fn blueprint() -> Blueprint {
    Blueprint::new()
        .values("kind", ["Fungible"])
        .values("name", ["MyToken"])
        .values("symbol", ["MTK"])
        .toggle("burnable")
        .toggle("pausable")
        .values("premint", [Json::from(1), Json::Null])
        .toggle("mintable")
        .values("access", Access::values())
        .toggle("upgradeable")
        .nested("info", Blueprint::new().values("license", ["MIT"]))
}

fn string_literal(s: &str) -> String {
    format!("String::from_str(e, \"{}\")", escape_string(s, '"'))
}

/// `amount` whole tokens in base units, as an `i128` literal.
fn base_units(amount: u64) -> String {
    format!("{amount}{}", "0".repeat(DECIMALS as usize))
}

/// Transfer overrides that stop while paused.
fn transfers() -> [(BaseFunction, &'static str); 2] {
    [
        (
            modules::function("transfer")
                .arg("from", "Address")
                .arg("to", "Address")
                .arg("amount", "i128")
                .block(TOKEN_BLOCK),
            "Self::ContractType::transfer(e, &from, &to, amount)",
        ),
        (
            modules::function("transfer_from")
                .arg("spender", "Address")
                .arg("from", "Address")
                .arg("to", "Address")
                .arg("amount", "i128")
                .block(TOKEN_BLOCK),
            "Self::ContractType::transfer_from(e, &spender, &from, &to, amount)",
        ),
    ]
}

fn burns() -> [(BaseFunction, &'static str); 2] {
    [
        (
            modules::function("burn")
                .arg("from", "Address")
                .arg("amount", "i128")
                .block(BURNABLE_BLOCK),
            "Self::ContractType::burn(e, &from, amount)",
        ),
        (
            modules::function("burn_from")
                .arg("spender", "Address")
                .arg("from", "Address")
                .arg("amount", "i128")
                .block(BURNABLE_BLOCK),
            "Self::ContractType::burn_from(e, &spender, &from, amount)",
        ),
    ]
}

fn add_paused_overrides(
    c: &mut ContractBuilder,
    functions: [(BaseFunction, &'static str); 2],
) -> Result<()> {
    for (function, body) in functions {
        let handle = pausable::add_pausable(c, &function)?;
        c.set_function_body(&handle, vec![body.to_string()])?;
    }
    Ok(())
}

pub fn build(opts: &FungibleOptions) -> Result<Contract> {
    let mut c = start(&opts.name)?;
    let access = Access::effective(opts.access, opts.requires_access());

    c.add_library(BASE, vec![], &[], false)?;
    modules::sdk(&mut c, "String")?;
    modules::constructor_code(
        &mut c,
        format!(
            "Base::set_metadata(e, {DECIMALS}, {}, {})",
            string_literal(&opts.name),
            string_literal(&opts.symbol)
        ),
    )?;
    if let Some(amount) = opts.premint.filter(|n| *n > 0) {
        modules::constructor_argument(&mut c, Argument::new("recipient", "Address"))?;
        modules::constructor_code(
            &mut c,
            format!("Base::mint(e, &recipient, {})", base_units(amount)),
        )?;
    }

    modules::add_trait_impl(&mut c, FUNGIBLE_TOKEN, ImplBlock::new(TOKEN_BLOCK).priority(1), true)?;
    c.add_block_item(TOKEN_BLOCK, Variable::new("ContractType", "type").value("Base"))?;

    if opts.pausable {
        pausable::add(&mut c, Access::required(access))?;
        add_paused_overrides(&mut c, transfers())?;
    }

    if opts.burnable {
        let block = ImplBlock::new(BURNABLE_BLOCK).section(EXTENSIONS);
        modules::add_trait_impl(&mut c, FUNGIBLE_BURNABLE, block, true)?;
        if opts.pausable {
            add_paused_overrides(&mut c, burns())?;
        }
    }

    if opts.mintable {
        let access = Access::required(access);
        let mint = modules::function("mint")
            .arg("account", "Address")
            .arg("amount", "i128");
        let handle = modules::add_function(&mut c, &access::with_caller(mint, access))?;
        if opts.pausable {
            pausable::set_pausable(&mut c, &handle)?;
        }
        access::require(&mut c, &handle, access, "minter")?;
        c.set_function_body(&handle, vec!["Base::mint(e, &account, amount)".to_string()])?;
    }

    if opts.upgradeable {
        upgradeable::add(&mut c, Access::required(access))?;
    }
    if let Some(access) = access {
        access::setup(&mut c, access)?;
    }
    apply_info(&mut c, &opts.info)?;

    Ok(c.build())
}
