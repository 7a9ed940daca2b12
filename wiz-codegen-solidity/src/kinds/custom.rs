//! A bare contract with optional cross-cutting features.

use serde::{Deserialize, Serialize};
use wizgen_codegen::{
    enumerate::Blueprint,
    options::{Access, Info, false_or},
};
use wizgen_ir::{Contract, Result};

use super::{start, upgradeable_values};
use crate::{
    features::{Upgradeable, access, pausable, upgradeable},
    modules::PAUSABLE,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomOptions {
    pub name: String,
    pub pausable: bool,
    #[serde(with = "false_or")]
    pub access: Option<Access>,
    #[serde(with = "false_or")]
    pub upgradeable: Option<Upgradeable>,
    pub info: Info,
}

impl Default for CustomOptions {
    fn default() -> Self {
        Self {
            name: "MyContract".to_string(),
            pausable: false,
            access: None,
            upgradeable: None,
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
        .values("upgradeable", upgradeable_values())
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
    let mut c = start(&opts.name, opts.upgradeable);
    let required = opts.pausable || opts.upgradeable == Some(Upgradeable::Uups);
    let access = Access::effective(opts.access, required);

    if opts.pausable {
        pausable::add(&mut c, PAUSABLE, Access::required(access))?;
    }
    if let Some(access) = access {
        access::setup(&mut c, access)?;
    }
    if let Some(kind) = opts.upgradeable {
        upgradeable::add(&mut c, kind, Access::required(access))?;
    }
    opts.info.apply(&mut c);

    Ok(c.build())
}
