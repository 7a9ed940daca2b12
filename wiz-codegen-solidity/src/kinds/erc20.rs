//! Fungible token (ERC-20).

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;
use wizgen_codegen::{
    enumerate::Blueprint,
    options::{Access, Info, false_or},
};
use wizgen_core::Value;
use wizgen_ir::{
    Argument, BaseFunction, Contract, ContractBuilder, FunctionKind, ImportOptions, Result,
};

use super::{add_override, start, upgradeable_values};
use crate::{
    features::{Upgradeable, access, pausable, upgradeable},
    modules::{
        ERC20, ERC20_BURNABLE, ERC20_FLASH_MINT, ERC20_PAUSABLE, ERC20_PERMIT, ERC20_VOTES, NONCES,
    },
};

/// Clock used by vote checkpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockMode {
    Blocknumber,
    Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Erc20Options {
    pub name: String,
    pub symbol: String,
    pub burnable: bool,
    pub pausable: bool,
    /// Whole tokens minted to a recipient at deployment.
    pub premint: Option<u64>,
    pub mintable: bool,
    pub permit: bool,
    /// Vote delegation and checkpoints. Implies `permit`.
    #[serde(with = "false_or")]
    pub votes: Option<ClockMode>,
    /// ERC-3156 flash minting.
    pub flashmint: bool,
    #[serde(with = "false_or")]
    pub access: Option<Access>,
    #[serde(with = "false_or")]
    pub upgradeable: Option<Upgradeable>,
    pub info: Info,
}

impl Default for Erc20Options {
    fn default() -> Self {
        Self {
            name: "MyToken".to_string(),
            symbol: "MTK".to_string(),
            burnable: false,
            pausable: false,
            premint: None,
            mintable: false,
            permit: false,
            votes: None,
            flashmint: false,
            access: None,
            upgradeable: None,
            info: Info::default(),
        }
    }
}

impl Erc20Options {
    fn requires_access(&self) -> bool {
        self.mintable || self.pausable || self.upgradeable == Some(Upgradeable::Uups)
    }
}

pub fn blueprint() -> Blueprint {
    Blueprint::new()
        .values("kind", ["ERC20"])
        .values("name", ["MyToken"])
        .values("symbol", ["MTK"])
        .toggle("burnable")
        .toggle("pausable")
        .values("premint", [Json::from(1), Json::Null])
        .toggle("mintable")
        .toggle("permit")
        .values("votes", [Json::Bool(false), "blocknumber".into(), "timestamp".into()])
        .toggle("flashmint")
        .values("access", Access::values())
        .values("upgradeable", upgradeable_values())
}

pub(crate) fn update() -> BaseFunction {
    BaseFunction::new("_update")
        .arg("from", "address")
        .arg("to", "address")
        .arg("value", "uint256")
        .kind(FunctionKind::Internal)
}

fn nonces() -> BaseFunction {
    BaseFunction::new("nonces")
        .arg("owner", "address")
        .returns(Argument::ret("uint256"))
        .kind(FunctionKind::View)
}

fn clock() -> BaseFunction {
    BaseFunction::new("clock")
        .returns(Argument::ret("uint48"))
        .kind(FunctionKind::View)
}

fn clock_mode() -> BaseFunction {
    BaseFunction::new("CLOCK_MODE")
        .returns(Argument::ret("string memory"))
        .mutability("pure")
}

pub fn build(opts: &Erc20Options) -> Result<Contract> {
    let mut c = start(&opts.name, opts.upgradeable);
    let access = Access::effective(opts.access, opts.requires_access());
    compose(&mut c, opts, access)?;
    finish(&mut c, access, opts.upgradeable, &opts.info)?;
    Ok(c.build())
}

/// Add the token and every selected extension, leaving access control,
/// upgradeability and metadata to [`finish`].
pub(crate) fn compose(
    c: &mut ContractBuilder,
    opts: &Erc20Options,
    access: Option<Access>,
) -> Result<()> {
    let up = c.is_upgradeable();

    c.add_library(
        ERC20.get(up),
        vec![Value::string(&opts.name), Value::string(&opts.symbol)],
        &[],
        true,
    )?;

    if opts.burnable {
        c.add_library(ERC20_BURNABLE.get(up), vec![], &[], true)?;
    }

    if opts.pausable {
        pausable::add(c, ERC20_PAUSABLE, Access::required(access))?;
        add_override(
            c,
            update(),
            &[ERC20.get(up).name, ERC20_PAUSABLE.get(up).name],
        )?;
    }

    if let Some(amount) = opts.premint.filter(|n| *n > 0) {
        c.add_constructor_argument(Argument::new("recipient", "address"));
        c.add_constructor_code(format!("_mint(recipient, {amount} * 10 ** decimals())"));
    }

    if opts.mintable {
        let mint = BaseFunction::new("mint")
            .arg("to", "address")
            .arg("amount", "uint256");
        let handle = c.add_function(&mint)?;
        access::require(c, &handle, Access::required(access), "MINTER")?;
        c.set_function_body(&handle, vec!["_mint(to, amount)".to_string()])?;
    }

    if opts.permit || opts.votes.is_some() {
        c.add_library(
            ERC20_PERMIT.get(up),
            vec![Value::string(&opts.name)],
            &[],
            true,
        )?;
    }

    if let Some(mode) = opts.votes {
        add_votes(c, mode)?;
    }

    if opts.flashmint {
        c.add_library(ERC20_FLASH_MINT.get(up), vec![], &[], true)?;
    }
    Ok(())
}

/// Inherit the votes extension. `ERC20Permit` must already be included, as
/// both share the nonces of `Nonces`.
fn add_votes(c: &mut ContractBuilder, mode: ClockMode) -> Result<()> {
    let up = c.is_upgradeable();
    let votes = ERC20_VOTES.get(up);
    let nonces_module = NONCES.get(up);

    c.add_library(votes, vec![], &[], true)?;
    add_override(c, update(), &[ERC20.get(up).name, votes.name])?;

    c.add_import(nonces_module.path, nonces_module.name, ImportOptions::default())?;
    add_override(c, nonces(), &[ERC20_PERMIT.get(up).name, nonces_module.name])?;

    if mode == ClockMode::Timestamp {
        let handle = c.add_function(&clock())?;
        c.add_override(&handle, votes.name)?;
        c.set_function_body(&handle, vec!["return uint48(block.timestamp)".to_string()])?;

        let handle = c.add_function(&clock_mode())?;
        c.add_override(&handle, votes.name)?;
        c.set_function_body(&handle, vec!["return \"mode=timestamp\"".to_string()])?;
    }
    Ok(())
}

/// Wire access control, upgradeability and metadata. Runs last.
pub(crate) fn finish(
    c: &mut ContractBuilder,
    access: Option<Access>,
    upgradeable: Option<Upgradeable>,
    info: &Info,
) -> Result<()> {
    if let Some(access) = access {
        access::setup(c, access)?;
    }
    if let Some(kind) = upgradeable {
        upgradeable::add(c, kind, Access::required(access))?;
    }
    info.apply(c);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts: Erc20Options = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, Erc20Options::default());
    }

    #[test]
    fn test_mintable_forces_ownable() {
        let opts = Erc20Options {
            mintable: true,
            ..Default::default()
        };
        let contract = build(&opts).unwrap();
        let names: Vec<_> = contract.libraries().iter().map(|l| l.module.name).collect();
        assert_eq!(names, vec!["ERC20", "Ownable"]);
    }

    #[test]
    fn test_premint_and_roles() {
        let opts = Erc20Options {
            premint: Some(1000),
            mintable: true,
            access: Some(Access::Roles),
            ..Default::default()
        };
        let contract = build(&opts).unwrap();
        let args: Vec<_> = contract
            .constructor_args()
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(args, vec!["recipient", "defaultAdmin", "minter"]);
        assert_eq!(
            contract.constructor_code()[0],
            "_mint(recipient, 1000 * 10 ** decimals())"
        );
    }

    fn function<'a>(contract: &'a Contract, name: &str) -> &'a wizgen_ir::Function {
        contract
            .functions()
            .iter()
            .find(|f| f.name() == name)
            .unwrap_or_else(|| panic!("{name} is not declared"))
    }

    #[test]
    fn test_votes_implies_permit_and_nonces_override() {
        let opts = Erc20Options {
            votes: Some(ClockMode::Blocknumber),
            ..Default::default()
        };
        let contract = build(&opts).unwrap();
        let names: Vec<_> = contract.libraries().iter().map(|l| l.module.name).collect();
        assert_eq!(names, vec!["ERC20", "ERC20Permit", "ERC20Votes"]);

        let overrides: Vec<_> = function(&contract, "nonces").overrides.iter().collect();
        assert_eq!(overrides, vec!["ERC20Permit", "Nonces"]);
        let overrides: Vec<_> = function(&contract, "_update").overrides.iter().collect();
        assert_eq!(overrides, vec!["ERC20", "ERC20Votes"]);
        assert!(contract.imports().iter().any(|i| i.symbol == "Nonces"));
        assert!(!contract.functions().iter().any(|f| f.name() == "clock"));
    }

    #[test]
    fn test_timestamp_votes_override_clock() {
        let opts = Erc20Options {
            votes: Some(ClockMode::Timestamp),
            upgradeable: Some(Upgradeable::Transparent),
            ..Default::default()
        };
        let contract = build(&opts).unwrap();
        assert_eq!(
            function(&contract, "clock").code,
            vec!["return uint48(block.timestamp)"]
        );
        assert_eq!(
            function(&contract, "CLOCK_MODE").code,
            vec!["return \"mode=timestamp\""]
        );
        let overrides: Vec<_> = function(&contract, "nonces").overrides.iter().collect();
        assert_eq!(overrides, vec!["ERC20PermitUpgradeable", "NoncesUpgradeable"]);
    }

    #[test]
    fn test_flashmint_adds_extension() {
        let opts = Erc20Options {
            flashmint: true,
            ..Default::default()
        };
        let contract = build(&opts).unwrap();
        let names: Vec<_> = contract.libraries().iter().map(|l| l.module.name).collect();
        assert_eq!(names, vec!["ERC20", "ERC20FlashMint"]);
    }

    #[test]
    fn test_upgradeable_uses_upgradeable_modules() {
        let opts = Erc20Options {
            pausable: true,
            upgradeable: Some(Upgradeable::Uups),
            ..Default::default()
        };
        let contract = build(&opts).unwrap();
        let names: Vec<_> = contract.libraries().iter().map(|l| l.module.name).collect();
        assert_eq!(
            names,
            vec![
                "ERC20Upgradeable",
                "ERC20PausableUpgradeable",
                "OwnableUpgradeable",
                "Initializable",
                "UUPSUpgradeable",
            ]
        );
        assert!(contract.is_upgradeable());
    }
}
