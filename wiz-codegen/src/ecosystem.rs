//! The contract every target ecosystem implements, and the generic
//! generation pipeline.

use std::fmt::Debug;

use indexmap::{IndexMap, IndexSet};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, debug_span};
use wizgen_ir::Contract;

use crate::{
    Error, Result, enumerate::Blueprint, printer, printer::Syntax, resolve,
    resolve::LibrarySources,
};

/// A target ecosystem: its contract kinds, feature composers and syntax.
pub trait Ecosystem {
    /// Typed options, internally tagged by `kind`.
    type Options: Serialize + DeserializeOwned + Debug;

    /// Target identifier (e.g., "solidity", "cairo", "stellar")
    fn name(&self) -> &'static str;

    /// Contract kinds this ecosystem can generate.
    fn kinds(&self) -> &'static [&'static str];

    /// Every option combination worth testing for `kind`.
    fn blueprint(&self, kind: &str) -> Option<Blueprint>;

    /// Run the feature composers and freeze the contract.
    fn build(&self, options: &Self::Options) -> wizgen_ir::Result<Contract>;

    fn syntax(&self) -> &dyn Syntax;

    fn file_name(&self, contract: &Contract) -> String;

    /// Library sources bundled with the generated contract.
    ///
    /// Ecosystems whose libraries come from a package manager return `None`
    /// and only the contract file is produced.
    fn library_sources(&self) -> Option<&LibrarySources> {
        None
    }

    /// Library files the contract imports directly.
    fn direct_imports(&self, contract: &Contract) -> Vec<String> {
        contract
            .imports()
            .iter()
            .map(|i| i.path.clone())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    /// Resolved paths imported by a generated or bundled file.
    fn extract_imports(&self, _path: &str, _source: &str) -> Vec<String> {
        Vec::new()
    }
}

/// The result of one generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub contract: Contract,
    pub file_name: String,
    /// Contract file first, then bundled library files in sorted order.
    pub files: IndexMap<String, String>,
}

impl Generated {
    /// Text of the generated contract file.
    pub fn source(&self) -> &str {
        self.files
            .get(&self.file_name)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// Build, print and resolve one contract.
pub fn generate<E: Ecosystem + ?Sized>(ecosystem: &E, options: &E::Options) -> Result<Generated> {
    let _span = debug_span!("generate", ecosystem = Ecosystem::name(ecosystem)).entered();

    let contract = ecosystem.build(options)?;
    let file_name = ecosystem.file_name(&contract);
    let source = printer::render(&contract, ecosystem.syntax());
    let files = match ecosystem.library_sources() {
        Some(libs) => {
            let direct = ecosystem.direct_imports(&contract);
            resolve::with_imports(&file_name, &source, &direct, libs)?
        }
        None => IndexMap::from([(file_name.clone(), source)]),
    };

    debug!(
        contract = contract.name(),
        files = files.len(),
        "generated contract"
    );
    Ok(Generated {
        contract,
        file_name,
        files,
    })
}

/// Object-safe view of an [`Ecosystem`], driven by untyped option records.
///
/// The CLI and the regression oracle work with `dyn Target` so every
/// ecosystem can be handled uniformly.
pub trait Target {
    fn name(&self) -> &'static str;

    fn kinds(&self) -> &'static [&'static str];

    /// Blueprint for `kind`, or [`Error::UnknownKind`].
    fn blueprint(&self, kind: &str) -> Result<Blueprint>;

    /// Deserialize an option record and generate from it.
    fn generate_value(&self, options: serde_json::Value) -> Result<Generated>;

    fn extract_imports(&self, path: &str, source: &str) -> Vec<String>;
}

impl<E: Ecosystem> Target for E {
    fn name(&self) -> &'static str {
        Ecosystem::name(self)
    }

    fn kinds(&self) -> &'static [&'static str] {
        Ecosystem::kinds(self)
    }

    fn blueprint(&self, kind: &str) -> Result<Blueprint> {
        Ecosystem::blueprint(self, kind).ok_or_else(|| Error::UnknownKind {
            target: Ecosystem::name(self).to_string(),
            kind: kind.to_string(),
            available: Ecosystem::kinds(self).join(", "),
        })
    }

    fn generate_value(&self, options: serde_json::Value) -> Result<Generated> {
        let options: E::Options =
            serde_json::from_value(options).map_err(|source| Error::InvalidOptions {
                target: Ecosystem::name(self).to_string(),
                source,
            })?;
        generate(self, &options)
    }

    fn extract_imports(&self, path: &str, source: &str) -> Vec<String> {
        Ecosystem::extract_imports(self, path, source)
    }
}
