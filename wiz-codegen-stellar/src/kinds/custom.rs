//! A bare contract with optional cross-cutting features.

use serde::{Deserialize, Serialize};
use wizgen_codegen::{
    enumerate::Blueprint,
    options::{Access, Info, false_or},
};
use wizgen_ir::{Contract, Result};

use super::{apply_info, start};
use crate::features::{access, pausable, upgradeable};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomOptions {
    pub name: String,
    pub pausable: bool,
    #[serde(with = "false_or")]
    pub access: Option<Access>,
    pub upgradeable: bool,
    pub info: Info,
}

impl Default for CustomOptions {
    fn default() -> Self {
        Self {
            name: "MyContract".to_string(),
            pausable: false,
            access: None,
            upgradeable: false,
            info: Info::default(),
        }
    }
}

pub fn blueprint() -> Blueprint {
    Blueprint::new()
        .values("kind", ["Custom"])
        .values("name", ["MyContract"])
        .toggle("pausable")
        .values("access", Access::values())
        .toggle("upgradeable")
        .nested(
            "info",
            Blueprint::new()
                .values(
                    "securityContact",
                    [serde_json::Value::from("security@example.com"), serde_json::Value::Null],
                )
                .values("license", ["MIT"]),
        )
}

pub fn build(opts: &CustomOptions) -> Result<Contract> {
    let mut c = start(&opts.name)?;
    let access = Access::effective(opts.access, opts.pausable || opts.upgradeable);

    if opts.pausable {
        pausable::add(&mut c, Access::required(access))?;
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
