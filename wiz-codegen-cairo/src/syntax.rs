//! Cairo 0.10 rendering hooks.

use wizgen_codegen::{
    options::SECURITY_CONTACT,
    printer::{FunctionParts, ImportClause, Shell, Syntax, SyntaxTable},
};
use wizgen_core::{Version, escape_string};
use wizgen_ir::{Argument, BaseFunction, Contract, Function, FunctionKind, Library, Variable};

use crate::modules::implicit_args;

/// OpenZeppelin Contracts for Cairo release the generated code targets.
pub const CONTRACTS_VERSION: Version = Version::new(0, 6, 1);

#[derive(Debug)]
pub struct CairoSyntax {
    table: SyntaxTable,
}

impl Default for CairoSyntax {
    fn default() -> Self {
        Self::new()
    }
}

impl CairoSyntax {
    pub const fn new() -> Self {
        Self {
            table: SyntaxTable {
                trailing_comma: true,
                members_in_shell: false,
                ..SyntaxTable::DEFAULT
            },
        }
    }

    fn params(args: &[Argument]) -> Vec<String> {
        args.iter()
            .map(|arg| match &arg.ty {
                Some(ty) => format!("{}: {}", arg.name, ty),
                None => arg.name.clone(),
            })
            .collect()
    }

    /// `func name{syscall_ptr: felt*, ...}(`
    fn prefix(name: &str, implicit: &[Argument]) -> String {
        if implicit.is_empty() {
            format!("func {name}(")
        } else {
            format!("func {}{{{}}}(", name, Self::params(implicit).join(", "))
        }
    }

    /// How `function` is called from the contract: through its namespace,
    /// or bare when its module is imported by name.
    fn qualified(function: &BaseFunction) -> String {
        match function.module {
            Some(module) if module.use_prefix => {
                format!("{}.{}", module.name, function.library_name())
            }
            _ => function.library_name().to_string(),
        }
    }

    fn forward(function: &BaseFunction) -> String {
        let args: Vec<&str> = function.args.iter().map(|a| a.name.as_str()).collect();
        format!("{}({})", Self::qualified(function), args.join(", "))
    }
}

impl Syntax for CairoSyntax {
    fn table(&self) -> &SyntaxTable {
        &self.table
    }

    /// Cairo short strings are single-quoted.
    fn quote(&self, s: &str) -> String {
        format!("'{}'", escape_string(s, '\''))
    }

    fn header(&self, contract: &Contract) -> Vec<String> {
        let mut lines = vec![
            format!("// SPDX-License-Identifier: {}", contract.license()),
            format!(
                "// Compatible with OpenZeppelin Contracts for Cairo {}",
                CONTRACTS_VERSION.caret()
            ),
        ];
        lines.extend(contract.doc_tags().iter().map(|tag| match tag.key.as_str() {
            SECURITY_CONTACT => format!("// @custom:security-contact {}", tag.value),
            key => format!("// @custom:{} {}", key, tag.value),
        }));
        lines.push(String::new());
        lines.push("%lang starknet".to_string());
        lines
    }

    fn import_clause(&self, path: &str, _symbols: &[String], wrapped: bool) -> ImportClause {
        if wrapped {
            ImportClause {
                head: format!("from {path} import ("),
                tail: ")".to_string(),
            }
        } else {
            ImportClause {
                head: format!("from {path} import "),
                tail: String::new(),
            }
        }
    }

    /// Cairo has no contract declaration; the file is the contract.
    fn contract_shell(&self, _contract: &Contract, _libraries: &[&Library]) -> Shell {
        Shell {
            open: Vec::new(),
            close: None,
        }
    }

    fn variable(&self, variable: &Variable, constant: bool) -> String {
        if constant {
            let value = variable.value.as_deref().unwrap_or("0");
            format!("const {} = {};", variable.name, value)
        } else {
            format!(
                "@storage_var\nfunc {}() -> (value: {}) {{\n}}",
                variable.name, variable.ty
            )
        }
    }

    fn constructor(&self, contract: &Contract, libraries: &[&Library]) -> Vec<FunctionParts> {
        let mut body: Vec<String> = libraries
            .iter()
            .filter(|lib| lib.is_initializable())
            .map(|lib| {
                let params: Vec<String> = lib.params().iter().map(|v| self.value(v)).collect();
                format!("{}.initializer({})", lib.module.name, params.join(", "))
            })
            .collect();
        body.extend(contract.constructor_code().iter().cloned());
        if body.is_empty() && contract.constructor_args().is_empty() {
            return Vec::new();
        }
        body.push("return ()".to_string());

        // Proxied contracts are set up through an initializer, not a constructor.
        let (decorator, name) = if contract.is_upgradeable() {
            ("@external", "initializer")
        } else {
            ("@constructor", "constructor")
        };
        vec![FunctionParts {
            attributes: vec![decorator.to_string()],
            prefix: Self::prefix(name, &implicit_args()),
            params: Self::params(contract.constructor_args()),
            suffix: ") {".to_string(),
            body,
            ..Default::default()
        }]
    }

    fn function(&self, _contract: &Contract, function: &Function) -> Option<FunctionParts> {
        let base = &function.base;
        let mut body: Vec<String> = function.guards.iter().cloned().collect();
        body.extend(
            function
                .library_calls
                .iter()
                .map(|call| format!("{}()", Self::qualified(call))),
        );
        body.extend(function.code_before.iter().cloned());

        if !function.code.is_empty() {
            body.extend(function.code.iter().cloned());
        } else if base.passthrough {
            let call = Self::forward(base);
            body.push(if function.returns_value() {
                format!("return {call}")
            } else {
                call
            });
        } else if body.is_empty() {
            return None;
        }
        if !function.returns_value() {
            body.push("return ()".to_string());
        }

        let attributes = match base.kind {
            FunctionKind::View => vec!["@view".to_string()],
            FunctionKind::External => vec!["@external".to_string()],
            FunctionKind::Internal => Vec::new(),
        };
        let suffix = if function.returns_value() {
            format!(") -> ({}) {{", Self::params(&base.returns).join(", "))
        } else {
            ") {".to_string()
        };

        Some(FunctionParts {
            attributes,
            prefix: Self::prefix(&base.name, &base.implicit_args),
            params: Self::params(&base.args),
            suffix,
            body,
            returns_value: function.returns_value(),
            ..Default::default()
        })
    }
}
