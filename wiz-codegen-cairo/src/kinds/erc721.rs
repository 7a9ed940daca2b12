//! ERC-721 non-fungible token.

use serde::{Deserialize, Serialize};
use wizgen_codegen::{
    enumerate::Blueprint,
    options::{Access, Info, false_or},
};
use wizgen_core::Value;
use wizgen_ir::{Argument, BaseFunction, Contract, Result};

use super::start;
use crate::{
    features::{access, pausable, upgradeable},
    modules::{self, ERC165, ERC721, UINT256},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Erc721Options {
    pub name: String,
    pub symbol: String,
    pub burnable: bool,
    pub pausable: bool,
    pub mintable: bool,
    #[serde(with = "false_or")]
    pub access: Option<Access>,
    pub upgradeable: bool,
    pub info: Info,
}

impl Default for Erc721Options {
    fn default() -> Self {
        Self {
            name: "MyToken".to_string(),
            symbol: "MTK".to_string(),
            burnable: false,
            pausable: false,
            mintable: false,
            access: None,
            upgradeable: false,
            info: Info::default(),
        }
    }
}

impl Erc721Options {
    fn requires_access(&self) -> bool {
        self.pausable || self.mintable
    }
}

pub fn blueprint() -> Blueprint {
    Blueprint::new()
        .values("kind", ["ERC721"])
        .values("name", ["MyToken"])
        .values("symbol", ["MTK"])
        .toggle("burnable")
        .toggle("pausable")
        .toggle("mintable")
        .values("access", Access::values())
        .toggle("upgradeable")
        .nested("info", Blueprint::new().values("license", ["MIT"]))
}

fn views() -> Vec<BaseFunction> {
    let view = |name: &str| modules::view(ERC721, name);
    vec![
        modules::view(ERC165, "supportsInterface")
            .arg("interfaceId", "felt")
            .returns(Argument::new("success", "felt"))
            .parent_name("supports_interface"),
        view("name").returns(Argument::new("name", "felt")),
        view("symbol").returns(Argument::new("symbol", "felt")),
        view("balanceOf")
            .arg("owner", "felt")
            .returns(Argument::new("balance", "Uint256"))
            .parent_name("balance_of"),
        view("ownerOf")
            .arg("tokenId", "Uint256")
            .returns(Argument::new("owner", "felt"))
            .parent_name("owner_of"),
        view("getApproved")
            .arg("tokenId", "Uint256")
            .returns(Argument::new("approved", "felt"))
            .parent_name("get_approved"),
        view("isApprovedForAll")
            .arg("owner", "felt")
            .arg("operator", "felt")
            .returns(Argument::new("approved", "felt"))
            .parent_name("is_approved_for_all"),
        view("tokenURI")
            .arg("tokenId", "Uint256")
            .returns(Argument::new("tokenURI", "felt"))
            .parent_name("token_uri"),
    ]
}

/// Transfer and approval functions, the ones pausing stops.
fn transfers() -> Vec<BaseFunction> {
    let forwarded = |name: &str| modules::forwarded(ERC721, name);
    vec![
        forwarded("approve")
            .arg("to", "felt")
            .arg("tokenId", "Uint256"),
        forwarded("setApprovalForAll")
            .arg("operator", "felt")
            .arg("approved", "felt")
            .parent_name("set_approval_for_all"),
        forwarded("transferFrom")
            .arg("from_", "felt")
            .arg("to", "felt")
            .arg("tokenId", "Uint256")
            .parent_name("transfer_from"),
        forwarded("safeTransferFrom")
            .arg("from_", "felt")
            .arg("to", "felt")
            .arg("tokenId", "Uint256")
            .arg("data_len", "felt")
            .arg("data", "felt*")
            .parent_name("safe_transfer_from"),
    ]
}

fn burn() -> BaseFunction {
    modules::external("burn").arg("tokenId", "Uint256")
}

fn safe_mint() -> BaseFunction {
    modules::external("safeMint")
        .arg("to", "felt")
        .arg("tokenId", "Uint256")
        .arg("data_len", "felt")
        .arg("data", "felt*")
        .arg("tokenURI", "felt")
}

pub fn build(opts: &Erc721Options) -> Result<Contract> {
    let mut c = start(&opts.name, opts.upgradeable)?;
    let access = Access::effective(opts.access, opts.requires_access());

    c.add_library(UINT256, vec![], &["Uint256"], false)?;
    c.add_library(
        ERC721,
        vec![Value::string(&opts.name), Value::string(&opts.symbol)],
        &[],
        true,
    )?;
    c.add_library(ERC165, vec![], &[], false)?;
    for function in views().iter().chain(&transfers()) {
        modules::add(&mut c, function)?;
    }

    if opts.pausable {
        pausable::add(&mut c, Access::required(access), &transfers())?;
    }

    if opts.burnable {
        let handle = modules::add(&mut c, &burn())?;
        c.add_module_function(ERC721, "assert_only_token_owner")?;
        c.set_function_body(
            &handle,
            vec![
                "ERC721.assert_only_token_owner(tokenId)".to_string(),
                "ERC721._burn(tokenId)".to_string(),
            ],
        )?;
        if opts.pausable {
            pausable::set_pausable(&mut c, &burn())?;
        }
    }

    if opts.mintable {
        let handle = modules::add(&mut c, &safe_mint())?;
        access::require(&mut c, &handle, Access::required(access), "MINTER")?;
        c.set_function_body(
            &handle,
            vec![
                "ERC721._safe_mint(to, tokenId, data_len, data)".to_string(),
                "ERC721._set_token_uri(tokenId, tokenURI)".to_string(),
            ],
        )?;
        if opts.pausable {
            pausable::set_pausable(&mut c, &safe_mint())?;
        }
    }

    if let Some(access) = access {
        access::setup(&mut c, access)?;
    }
    if opts.upgradeable {
        upgradeable::add(&mut c)?;
    }
    opts.info.apply(&mut c);

    Ok(c.build())
}
