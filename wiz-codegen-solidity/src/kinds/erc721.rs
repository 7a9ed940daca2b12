//! Non-fungible token (ERC-721).

use serde::{Deserialize, Serialize};
use wizgen_codegen::{
    enumerate::Blueprint,
    options::{Access, Info, false_or},
};
use wizgen_core::{Value, escape_string};
use wizgen_ir::{Argument, BaseFunction, Contract, ContractBuilder, FunctionKind, Result, Variable};

use super::{add_override, start, supports_interface, upgradeable_values};
use crate::{
    features::{Upgradeable, access, pausable, upgradeable},
    modules::{
        ACCESS_CONTROL, EIP712, ERC721, ERC721_BURNABLE, ERC721_ENUMERABLE, ERC721_PAUSABLE,
        ERC721_URI_STORAGE, ERC721_VOTES,
    },
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Erc721Options {
    pub name: String,
    pub symbol: String,
    pub base_uri: String,
    pub enumerable: bool,
    pub uri_storage: bool,
    pub burnable: bool,
    pub pausable: bool,
    pub mintable: bool,
    /// Assign token ids from a counter instead of taking them as input.
    pub incremental: bool,
    /// One vote per token, with delegation.
    pub votes: bool,
    #[serde(with = "false_or")]
    pub access: Option<Access>,
    #[serde(with = "false_or")]
    pub upgradeable: Option<Upgradeable>,
    pub info: Info,
}

impl Default for Erc721Options {
    fn default() -> Self {
        Self {
            name: "MyToken".to_string(),
            symbol: "MTK".to_string(),
            base_uri: String::new(),
            enumerable: false,
            uri_storage: false,
            burnable: false,
            pausable: false,
            mintable: false,
            incremental: false,
            votes: false,
            access: None,
            upgradeable: None,
            info: Info::default(),
        }
    }
}

impl Erc721Options {
    fn requires_access(&self) -> bool {
        self.mintable || self.pausable || self.upgradeable == Some(Upgradeable::Uups)
    }
}

pub fn blueprint() -> Blueprint {
    Blueprint::new()
        .values("kind", ["ERC721"])
        .values("name", ["MyToken"])
        .values("symbol", ["MTK"])
        .values("baseUri", ["https://example.com/", ""])
        .toggle("enumerable")
        .toggle("uriStorage")
        .toggle("burnable")
        .toggle("pausable")
        .toggle("mintable")
        .toggle("incremental")
        .toggle("votes")
        .values("access", Access::values())
        .values("upgradeable", upgradeable_values())
}

fn update() -> BaseFunction {
    BaseFunction::new("_update")
        .arg("to", "address")
        .arg("tokenId", "uint256")
        .arg("auth", "address")
        .returns(Argument::ret("address"))
        .kind(FunctionKind::Internal)
}

fn increase_balance() -> BaseFunction {
    BaseFunction::new("_increaseBalance")
        .arg("account", "address")
        .arg("value", "uint128")
        .kind(FunctionKind::Internal)
}

fn token_uri() -> BaseFunction {
    BaseFunction::new("tokenURI")
        .arg("tokenId", "uint256")
        .returns(Argument::ret("string memory"))
        .kind(FunctionKind::View)
}

fn base_uri() -> BaseFunction {
    BaseFunction::new("_baseURI")
        .returns(Argument::ret("string memory"))
        .kind(FunctionKind::Internal)
        .mutability("pure")
}

fn add_safe_mint(c: &mut ContractBuilder, opts: &Erc721Options, access: Access) -> Result<()> {
    let mut safe_mint = BaseFunction::new("safeMint").arg("to", "address");
    if !opts.incremental {
        safe_mint = safe_mint.arg("tokenId", "uint256");
    }
    if opts.uri_storage {
        safe_mint = safe_mint.arg("uri", "string memory");
    }

    let mut body = Vec::new();
    if opts.incremental {
        safe_mint = safe_mint.returns(Argument::ret("uint256"));
        c.add_variable(Variable::new("_nextTokenId", "uint256"))?;
        body.push("uint256 tokenId = _nextTokenId++".to_string());
    }
    body.push("_safeMint(to, tokenId)".to_string());
    if opts.uri_storage {
        body.push("_setTokenURI(tokenId, uri)".to_string());
    }
    if opts.incremental {
        body.push("return tokenId".to_string());
    }

    let handle = c.add_function(&safe_mint)?;
    access::require(c, &handle, access, "MINTER")?;
    c.set_function_body(&handle, body)
}

pub fn build(opts: &Erc721Options) -> Result<Contract> {
    let mut c = start(&opts.name, opts.upgradeable);
    let up = c.is_upgradeable();
    let access = Access::effective(opts.access, opts.requires_access());
    let erc721 = ERC721.get(up).name;

    c.add_library(
        ERC721.get(up),
        vec![Value::string(&opts.name), Value::string(&opts.symbol)],
        &[],
        true,
    )?;

    if !opts.base_uri.is_empty() {
        let handle = c.add_function(&base_uri())?;
        c.add_override(&handle, erc721)?;
        c.set_function_body(
            &handle,
            vec![format!("return \"{}\"", escape_string(&opts.base_uri, '"'))],
        )?;
    }

    if opts.enumerable {
        let extension = ERC721_ENUMERABLE.get(up).name;
        c.add_library(ERC721_ENUMERABLE.get(up), vec![], &[], true)?;
        add_override(&mut c, update(), &[erc721, extension])?;
        add_override(&mut c, increase_balance(), &[erc721, extension])?;
        add_override(&mut c, supports_interface(), &[erc721, extension])?;
    }

    if opts.uri_storage {
        let extension = ERC721_URI_STORAGE.get(up).name;
        c.add_library(ERC721_URI_STORAGE.get(up), vec![], &[], true)?;
        add_override(&mut c, token_uri(), &[erc721, extension])?;
        add_override(&mut c, supports_interface(), &[erc721, extension])?;
    }

    if opts.pausable {
        pausable::add(&mut c, ERC721_PAUSABLE, Access::required(access))?;
        add_override(&mut c, update(), &[erc721, ERC721_PAUSABLE.get(up).name])?;
    }

    if opts.burnable {
        c.add_library(ERC721_BURNABLE.get(up), vec![], &[], true)?;
    }

    if opts.mintable {
        add_safe_mint(&mut c, opts, Access::required(access))?;
    }

    if opts.votes {
        let extension = ERC721_VOTES.get(up).name;
        c.add_library(
            EIP712.get(up),
            vec![Value::string(&opts.name), Value::string("1")],
            &[],
            true,
        )?;
        c.add_library(ERC721_VOTES.get(up), vec![], &[], true)?;
        add_override(&mut c, update(), &[erc721, extension])?;
        add_override(&mut c, increase_balance(), &[erc721, extension])?;
    }

    if let Some(access) = access {
        access::setup(&mut c, access)?;
        if access == Access::Roles {
            add_override(
                &mut c,
                supports_interface(),
                &[erc721, ACCESS_CONTROL.get(up).name],
            )?;
        }
    }
    if let Some(kind) = opts.upgradeable {
        upgradeable::add(&mut c, kind, Access::required(access))?;
    }
    opts.info.apply(&mut c);

    Ok(c.build())
}
