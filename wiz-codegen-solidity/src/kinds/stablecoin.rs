//! Stablecoin: an ERC-20 with transfer limitations and a custodian.
//!
//! Stablecoins build on the plain ERC-20 modules only, since the limitation
//! and custodian extensions have no upgradeable flavor.

use serde::{Deserialize, Serialize};
use serde_json::{Value as Json, json};
use wizgen_codegen::{
    enumerate::Blueprint,
    options::{Access, Info, false_or},
};
use wizgen_ir::{Argument, BaseFunction, Contract, ContractBuilder, FunctionKind, Result};

use super::{
    add_override,
    erc20::{self, ClockMode, Erc20Options},
    start,
};
use crate::{
    features::access,
    modules::{ERC20, ERC20_ALLOWLIST, ERC20_BLOCKLIST, ERC20_CUSTODIAN},
};

/// Which accounts may hold and move tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Limitations {
    /// Only explicitly allowed accounts.
    Allowlist,
    /// Every account except blocked ones.
    Blocklist,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StablecoinOptions {
    pub name: String,
    pub symbol: String,
    pub burnable: bool,
    pub pausable: bool,
    pub premint: Option<u64>,
    pub mintable: bool,
    pub permit: bool,
    #[serde(with = "false_or")]
    pub votes: Option<ClockMode>,
    pub flashmint: bool,
    #[serde(with = "false_or")]
    pub limitations: Option<Limitations>,
    /// Let a custodian freeze balances.
    pub custodian: bool,
    #[serde(with = "false_or")]
    pub access: Option<Access>,
    pub info: Info,
}

impl Default for StablecoinOptions {
    fn default() -> Self {
        Self {
            name: "MyStablecoin".to_string(),
            symbol: "MST".to_string(),
            burnable: false,
            pausable: false,
            premint: None,
            mintable: false,
            permit: false,
            votes: None,
            flashmint: false,
            limitations: None,
            custodian: false,
            access: None,
            info: Info::default(),
        }
    }
}

impl StablecoinOptions {
    /// The ERC-20 part of these options.
    pub fn token(&self) -> Erc20Options {
        Erc20Options {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            burnable: self.burnable,
            pausable: self.pausable,
            premint: self.premint,
            mintable: self.mintable,
            permit: self.permit,
            votes: self.votes,
            flashmint: self.flashmint,
            access: self.access,
            upgradeable: None,
            info: self.info.clone(),
        }
    }

    fn requires_access(&self) -> bool {
        self.mintable || self.pausable || self.limitations.is_some() || self.custodian
    }
}

/// A minimal token and a token with every ERC-20 extension, each crossed
/// with the stablecoin extensions.
pub fn blueprint() -> Blueprint {
    let extensions = |b: Blueprint| {
        b.values("limitations", [Json::Bool(false), "allowlist".into(), "blocklist".into()])
            .toggle("custodian")
    };

    let basic = Blueprint::new()
        .values("kind", ["Stablecoin"])
        .values("name", ["MyStablecoin"])
        .values("symbol", ["MST"])
        .values("burnable", [false])
        .values("pausable", [false])
        .values("mintable", [false])
        .values("permit", [false])
        .values("votes", [false])
        .values("flashmint", [false])
        .values("premint", [1])
        .values("access", [false]);

    let full = Blueprint::new()
        .values("kind", ["Stablecoin"])
        .values("name", ["MyStablecoin"])
        .values("symbol", ["MST"])
        .values("burnable", [true])
        .values("pausable", [true])
        .values("mintable", [true])
        .values("permit", [true])
        .values("votes", ["timestamp"])
        .values("flashmint", [true])
        .values("premint", [1])
        .values("access", Access::values())
        .values(
            "info",
            [
                json!({}),
                json!({"securityContact": "security@example.com", "license": "WTFPL"}),
            ],
        );

    extensions(basic).or(extensions(full))
}

fn approve() -> BaseFunction {
    BaseFunction::new("_approve")
        .arg("owner", "address")
        .arg("spender", "address")
        .arg("value", "uint256")
        .arg("emitEvent", "bool")
        .kind(FunctionKind::Internal)
}

fn is_custodian() -> BaseFunction {
    BaseFunction::new("_isCustodian")
        .arg("user", "address")
        .returns(Argument::ret("bool"))
        .kind(FunctionKind::Internal)
        .mutability("view")
}

pub fn build(opts: &StablecoinOptions) -> Result<Contract> {
    let token = opts.token();
    let mut c = start(&opts.name, None);
    let access = Access::effective(opts.access, opts.requires_access());

    erc20::compose(&mut c, &token, access)?;
    if let Some(limitations) = opts.limitations {
        add_limitations(&mut c, limitations, Access::required(access))?;
    }
    if opts.custodian {
        add_custodian(&mut c, Access::required(access))?;
    }
    erc20::finish(&mut c, access, None, &opts.info)?;

    Ok(c.build())
}

fn add_limitations(c: &mut ContractBuilder, limitations: Limitations, access: Access) -> Result<()> {
    let (module, [(add, add_call), (remove, remove_call)]) = match limitations {
        Limitations::Allowlist => (
            ERC20_ALLOWLIST,
            [("allowUser", "_allowUser"), ("disallowUser", "_disallowUser")],
        ),
        Limitations::Blocklist => (
            ERC20_BLOCKLIST,
            [("blockUser", "_blockUser"), ("unblockUser", "_unblockUser")],
        ),
    };

    c.add_library(module, vec![], &[], false)?;
    add_override(c, erc20::update(), &[ERC20.plain.name, module.name])?;
    add_override(c, approve(), &[ERC20.plain.name, module.name])?;

    for (name, call) in [(add, add_call), (remove, remove_call)] {
        let handle = c.add_function(&BaseFunction::new(name).arg("user", "address"))?;
        access::require(c, &handle, access, "LIMITER")?;
        c.set_function_body(&handle, vec![format!("{call}(user)")])?;
    }
    Ok(())
}

fn add_custodian(c: &mut ContractBuilder, access: Access) -> Result<()> {
    c.add_library(ERC20_CUSTODIAN, vec![], &[], false)?;
    add_override(c, erc20::update(), &[ERC20.plain.name, ERC20_CUSTODIAN.name])?;

    access::setup(c, access)?;
    let check = match access {
        Access::Ownable => "return user == owner()".to_string(),
        Access::Roles => {
            let role = access::grant_role(c, "CUSTODIAN")?;
            format!("return hasRole({role}, user)")
        }
    };
    let handle = c.add_function(&is_custodian())?;
    c.add_override(&handle, ERC20_CUSTODIAN.name)?;
    c.set_function_body(&handle, vec![check])
}
