//! Soroban Rust rendering hooks.

use wizgen_codegen::printer::{
    FunctionParts, ImportClause, Shell, Syntax, SyntaxTable, is_main_block,
};
use wizgen_core::{Version, escape_string};
use wizgen_ir::{Argument, Contract, Function, ImplBlock, Library, Variable};

use crate::modules::CONTRACT_IMPL;

/// OpenZeppelin Stellar Soroban Contracts release the generated code targets.
pub const CONTRACTS_VERSION: Version = Version::new(0, 4, 1);

#[derive(Debug)]
pub struct StellarSyntax {
    table: SyntaxTable,
}

impl Default for StellarSyntax {
    fn default() -> Self {
        Self::new()
    }
}

impl StellarSyntax {
    pub const fn new() -> Self {
        Self {
            table: SyntaxTable {
                trailing_comma: true,
                unterminated_tail: true,
                members_in_shell: false,
                constructor_in_main_block: true,
                ..SyntaxTable::DEFAULT
            },
        }
    }

    fn params<'a>(args: impl IntoIterator<Item = &'a Argument>) -> Vec<String> {
        args.into_iter()
            .map(|arg| match &arg.ty {
                Some(ty) => format!("{}: {}", arg.name, ty),
                None => arg.name.clone(),
            })
            .collect()
    }

    fn in_main_block(contract: &Contract, function: &Function) -> bool {
        function
            .base
            .block
            .as_deref()
            .is_none_or(|block| block == contract.name())
    }
}

impl Syntax for StellarSyntax {
    fn table(&self) -> &SyntaxTable {
        &self.table
    }

    fn header(&self, contract: &Contract) -> Vec<String> {
        vec![
            format!("// SPDX-License-Identifier: {}", contract.license()),
            format!(
                "// Compatible with OpenZeppelin Stellar Soroban Contracts {}",
                CONTRACTS_VERSION.caret()
            ),
            "#![no_std]".to_string(),
        ]
    }

    /// `use a::b::C;` for a lone symbol, braces otherwise. `self` imports
    /// always need braces.
    fn import_clause(&self, path: &str, symbols: &[String], wrapped: bool) -> ImportClause {
        let bare = !wrapped && symbols.len() == 1 && !symbols[0].starts_with("self");
        if bare {
            ImportClause {
                head: format!("use {path}::"),
                tail: ";".to_string(),
            }
        } else {
            ImportClause {
                head: format!("use {path}::{{"),
                tail: "};".to_string(),
            }
        }
    }

    fn contract_shell(&self, contract: &Contract, _libraries: &[&Library]) -> Shell {
        let mut open: Vec<String> = contract
            .doc_tags()
            .iter()
            .map(|tag| {
                format!(
                    "contractmeta!(key = \"{}\", val = \"{}\");",
                    tag.key,
                    escape_string(&tag.value, '"')
                )
            })
            .collect();
        if !open.is_empty() {
            open.push(String::new());
        }
        if contract.is_upgradeable() {
            open.push("#[derive(Upgradeable)]".to_string());
        }
        open.push("#[contract]".to_string());
        open.push(format!("pub struct {};", contract.name()));
        Shell { open, close: None }
    }

    fn variable(&self, variable: &Variable, _constant: bool) -> String {
        let value = variable.value.as_deref().unwrap_or_default();
        format!("const {}: {} = {};", variable.name, variable.ty, value)
    }

    fn constructor(&self, contract: &Contract, _libraries: &[&Library]) -> Vec<FunctionParts> {
        if contract.constructor_args().is_empty() && contract.constructor_code().is_empty() {
            return Vec::new();
        }
        let env = Argument::new("e", "&Env");
        vec![FunctionParts {
            prefix: "pub fn __constructor(".to_string(),
            params: Self::params(std::iter::once(&env).chain(contract.constructor_args())),
            suffix: ") {".to_string(),
            body: contract.constructor_code().to_vec(),
            ..Default::default()
        }]
    }

    fn function(&self, contract: &Contract, function: &Function) -> Option<FunctionParts> {
        let body = function.body();
        if body.is_empty() {
            return None;
        }
        let base = &function.base;
        let visibility = if Self::in_main_block(contract, function) {
            "pub fn"
        } else {
            "fn"
        };
        let suffix = match base.returns.first().and_then(|r| r.ty.as_deref()) {
            Some(ty) => format!(") -> {ty} {{"),
            None => ") {".to_string(),
        };

        Some(FunctionParts {
            attributes: function.guards.iter().map(|g| format!("#[{g}]")).collect(),
            prefix: format!("{} {}(", visibility, base.name),
            params: Self::params(base.implicit_args.iter().chain(&base.args)),
            suffix,
            body,
            returns_value: function.returns_value(),
            ..Default::default()
        })
    }

    fn block_shell(&self, contract: &Contract, block: &ImplBlock) -> Option<Shell> {
        let head = match &block.for_type {
            Some(ty) => format!("impl {} for {} {{", block.name, ty),
            None => format!("impl {} {{", block.name),
        };
        let open = if is_main_block(contract, block) {
            let empty = contract.constructor_args().is_empty()
                && contract.constructor_code().is_empty()
                && contract.functions_in(&block.name).next().is_none();
            if empty {
                return None;
            }
            vec![CONTRACT_IMPL.to_string(), head]
        } else {
            block.attributes.iter().cloned().chain([head]).collect()
        };
        Some(Shell {
            open,
            close: Some("}".to_string()),
        })
    }
}
