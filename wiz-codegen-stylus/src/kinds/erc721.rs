//! ERC-721 non-fungible token on the `openzeppelin_stylus` base
//! implementation.

use serde::{Deserialize, Serialize};
use wizgen_codegen::{
    enumerate::Blueprint,
    options::{Access, Info, false_or},
};
use wizgen_ir::{BaseFunction, Contract, ImplBlock, Result};

use super::start;
use crate::{
    features::{access, pausable},
    modules::{self, ERC721, EXTENSIONS},
};

const BURNABLE_BLOCK: &str = "Burnable";
const EXTENSIONS_PATH: &str = "openzeppelin_stylus::token::erc721::extensions";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Erc721Options {
    pub name: String,
    pub burnable: bool,
    pub pausable: bool,
    pub mintable: bool,
    #[serde(with = "false_or")]
    pub access: Option<Access>,
    pub info: Info,
}

impl Default for Erc721Options {
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
        .values("kind", ["ERC721"])
        .values("name", ["MyToken"])
        .toggle("burnable")
        .toggle("pausable")
        .toggle("mintable")
        .values("access", Access::values())
        .nested("info", Blueprint::new().values("license", ["MIT"]))
}

/// Transfers that stop while paused. The overload taking `data` keeps its
/// Solidity selector.
fn transfers() -> [(BaseFunction, Option<&'static str>, &'static str); 3] {
    [
        (
            modules::fallible("transfer_from")
                .arg("from", "Address")
                .arg("to", "Address")
                .arg("token_id", "U256"),
            None,
            "transfer_from(from, to, token_id)",
        ),
        (
            modules::fallible("safe_transfer_from")
                .arg("from", "Address")
                .arg("to", "Address")
                .arg("token_id", "U256"),
            None,
            "safe_transfer_from(from, to, token_id)",
        ),
        (
            modules::fallible("safe_transfer_from_with_data")
                .arg("from", "Address")
                .arg("to", "Address")
                .arg("token_id", "U256")
                .arg("data", "Bytes"),
            Some("selector(name = \"safeTransferFrom\")"),
            "safe_transfer_from_with_data(from, to, token_id, data)",
        ),
    ]
}

pub fn build(opts: &Erc721Options) -> Result<Contract> {
    let mut c = start(&opts.name)?;
    let access = Access::effective(opts.access, opts.pausable || opts.mintable);

    modules::add_storage(&mut c, ERC721, "erc721")?;

    if opts.pausable {
        pausable::add(&mut c, Access::required(access))?;
        modules::use_trait(&mut c, ERC721.path, "IErc721")?;
        for (function, selector, call) in transfers() {
            let handle = modules::add_function(&mut c, &function)?;
            if let Some(selector) = selector {
                c.add_guard(&handle, selector)?;
            }
            pausable::set_pausable(&mut c, &handle)?;
            c.set_function_body(&handle, vec![modules::forward("erc721", call)])?;
        }
    }

    if opts.burnable {
        c.add_impl_block(ImplBlock::new(BURNABLE_BLOCK).section(EXTENSIONS))?;
        modules::use_trait(&mut c, EXTENSIONS_PATH, "IErc721Burnable")?;
        let burn = modules::fallible("burn")
            .arg("token_id", "U256")
            .block(BURNABLE_BLOCK);
        let handle = modules::add_function(&mut c, &burn)?;
        if opts.pausable {
            pausable::set_pausable(&mut c, &handle)?;
        }
        c.set_function_body(&handle, vec![modules::forward("erc721", "burn(token_id)")])?;
    }

    if opts.mintable {
        let mint = modules::fallible("mint")
            .arg("to", "Address")
            .arg("token_id", "U256");
        let handle = modules::add_function(&mut c, &mint)?;
        if opts.pausable {
            pausable::set_pausable(&mut c, &handle)?;
        }
        access::require(&mut c, &handle, Access::required(access), "minter")?;
        c.set_function_body(&handle, vec![modules::forward("erc721", "_mint(to, token_id)")])?;
    }

    if let Some(access) = access {
        access::setup(&mut c, access)?;
    }
    opts.info.apply(&mut c);
    Ok(c.build())
}
