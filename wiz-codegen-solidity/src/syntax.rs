//! Solidity rendering hooks.

use wizgen_codegen::{
    options::SECURITY_CONTACT,
    printer::{FunctionParts, ImportClause, Shell, Syntax, SyntaxTable},
};
use wizgen_core::Version;
use wizgen_ir::{Argument, Contract, Function, FunctionKind, Library, Variable};

use crate::modules::init_stem;

/// OpenZeppelin Contracts release the bundled sources come from.
pub const CONTRACTS_VERSION: Version = Version::new(5, 0, 0);

pub const PRAGMA: &str = "pragma solidity ^0.8.27;";

/// Section of functions that only resolve multiple inheritance.
pub const OVERRIDES_SECTION: &str = "The following functions are overrides required by Solidity.";

#[derive(Debug)]
pub struct SoliditySyntax {
    table: SyntaxTable,
}

impl Default for SoliditySyntax {
    fn default() -> Self {
        Self::new()
    }
}

impl SoliditySyntax {
    pub const fn new() -> Self {
        Self {
            table: SyntaxTable {
                wrap_imports: false,
                ..SyntaxTable::DEFAULT
            },
        }
    }

    fn param(arg: &Argument) -> String {
        match &arg.ty {
            Some(ty) if arg.name.is_empty() => ty.clone(),
            Some(ty) => format!("{} {}", ty, arg.name),
            None => arg.name.clone(),
        }
    }

    fn params(args: &[Argument]) -> Vec<String> {
        args.iter().map(Self::param).collect()
    }

    /// `ERC20("MyToken", "MTK")`, for libraries constructed with arguments.
    fn base_calls(&self, libraries: &[&Library]) -> Vec<String> {
        libraries
            .iter()
            .filter(|lib| !lib.params().is_empty())
            .map(|lib| format!("{}({})", lib.module.name, self.args(lib)))
            .collect()
    }

    fn args(&self, lib: &Library) -> String {
        lib.params()
            .iter()
            .map(|v| self.value(v))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn initialize(&self, contract: &Contract, libraries: &[&Library]) -> FunctionParts {
        let mut body: Vec<String> = libraries
            .iter()
            .filter(|lib| lib.is_initializable())
            .map(|lib| format!("__{}_init({})", init_stem(&lib.module), self.args(lib)))
            .collect();
        body.extend(contract.constructor_code().iter().cloned());

        FunctionParts {
            prefix: "function initialize(".to_string(),
            params: Self::params(contract.constructor_args()),
            suffix: ")".to_string(),
            modifiers: vec!["public".to_string(), "initializer".to_string()],
            body,
            ..Default::default()
        }
    }
}

impl Syntax for SoliditySyntax {
    fn table(&self) -> &SyntaxTable {
        &self.table
    }

    fn header(&self, contract: &Contract) -> Vec<String> {
        vec![
            format!("// SPDX-License-Identifier: {}", contract.license()),
            format!(
                "// Compatible with OpenZeppelin Contracts {}",
                CONTRACTS_VERSION.caret()
            ),
            PRAGMA.to_string(),
        ]
    }

    fn import_clause(&self, path: &str, _symbols: &[String], _wrapped: bool) -> ImportClause {
        ImportClause {
            head: "import {".to_string(),
            tail: format!("}} from \"{path}\";"),
        }
    }

    fn contract_shell(&self, contract: &Contract, libraries: &[&Library]) -> Shell {
        let mut open: Vec<String> = contract
            .doc_tags()
            .iter()
            .map(|tag| match tag.key.as_str() {
                SECURITY_CONTACT => format!("/// @custom:security-contact {}", tag.value),
                key => format!("/// @custom:{} {}", key, tag.value),
            })
            .collect();

        let parents: Vec<&str> = libraries.iter().map(|lib| lib.module.name).collect();
        if parents.is_empty() {
            open.push(format!("contract {} {{", contract.name()));
        } else {
            open.push(format!(
                "contract {} is {} {{",
                contract.name(),
                parents.join(", ")
            ));
        }
        Shell {
            open,
            close: Some("}".to_string()),
        }
    }

    fn variable(&self, variable: &Variable, constant: bool) -> String {
        let visibility = if constant { "public constant" } else { "private" };
        match &variable.value {
            Some(value) => format!(
                "{} {} {} = {};",
                variable.ty, visibility, variable.name, value
            ),
            None => format!("{} {} {};", variable.ty, visibility, variable.name),
        }
    }

    fn constructor(&self, contract: &Contract, libraries: &[&Library]) -> Vec<FunctionParts> {
        if contract.is_upgradeable() {
            let disable = FunctionParts {
                attributes: vec!["/// @custom:oz-upgrades-unsafe-allow constructor".to_string()],
                prefix: "constructor(".to_string(),
                suffix: ") {".to_string(),
                body: vec!["_disableInitializers()".to_string()],
                ..Default::default()
            };
            return vec![disable, self.initialize(contract, libraries)];
        }

        let base_calls = self.base_calls(libraries);
        if base_calls.is_empty()
            && contract.constructor_args().is_empty()
            && contract.constructor_code().is_empty()
        {
            return Vec::new();
        }
        let suffix = if base_calls.is_empty() { ") {" } else { ")" };
        vec![FunctionParts {
            prefix: "constructor(".to_string(),
            params: Self::params(contract.constructor_args()),
            suffix: suffix.to_string(),
            modifiers: base_calls,
            body: contract.constructor_code().to_vec(),
            ..Default::default()
        }]
    }

    fn function(&self, _contract: &Contract, function: &Function) -> Option<FunctionParts> {
        let base = &function.base;
        let overrides: Vec<&str> = function.overrides.iter().map(String::as_str).collect();

        // A single parent needs no explicit override function.
        if function.code.is_empty()
            && function.code_before.is_empty()
            && overrides.len() < 2
            && function.guards.is_empty()
        {
            return None;
        }

        let mut modifiers = vec![match base.kind {
            FunctionKind::Internal => "internal".to_string(),
            FunctionKind::External | FunctionKind::View => "public".to_string(),
        }];
        match (&base.mutability, base.kind) {
            (Some(mutability), _) => modifiers.push(mutability.clone()),
            (None, FunctionKind::View) => modifiers.push("view".to_string()),
            _ => {}
        }
        match overrides.len() {
            0 => {}
            1 => modifiers.push("override".to_string()),
            _ => modifiers.push(format!("override({})", overrides.join(", "))),
        }
        modifiers.extend(function.guards.iter().cloned());
        if !base.returns.is_empty() {
            modifiers.push(format!("returns ({})", Self::params(&base.returns).join(", ")));
        }

        let mut body = function.body();
        if function.code.is_empty() && overrides.len() >= 2 {
            let args: Vec<&str> = base.args.iter().map(|a| a.name.as_str()).collect();
            let call = format!("super.{}({})", base.name, args.join(", "));
            body.push(if function.returns_value() {
                format!("return {call}")
            } else {
                call
            });
        }

        Some(FunctionParts {
            attributes: Vec::new(),
            prefix: format!("function {}(", base.name),
            params: Self::params(&base.args),
            suffix: ")".to_string(),
            modifiers,
            body,
            returns_value: function.returns_value(),
        })
    }

    fn section_header(&self, section: &str) -> Vec<String> {
        vec![format!("{} {}", self.table.comment, section)]
    }
}

#[cfg(test)]
mod tests {
    use wizgen_codegen::printer::render;
    use wizgen_core::Value;
    use wizgen_ir::{BaseFunction, ContractBuilder, Module};

    use super::*;

    #[test]
    fn test_empty_contract() {
        let contract = ContractBuilder::new("MyContract").build();
        insta::assert_snapshot!(render(&contract, &SoliditySyntax::default()), @r"
        // SPDX-License-Identifier: MIT
        // Compatible with OpenZeppelin Contracts ^5.0.0
        pragma solidity ^0.8.27;

        contract MyContract {}
        ");
    }

    #[test]
    fn test_constructor_base_calls() {
        let mut c = ContractBuilder::new("MyToken");
        c.add_library(
            Module::new("ERC20", "erc20.sol"),
            vec![Value::string("MyToken"), Value::string("MTK")],
            &[],
            true,
        )
        .unwrap();
        let contract = c.build();
        let text = render(&contract, &SoliditySyntax::default());
        assert!(text.contains("    constructor() ERC20(\"MyToken\", \"MTK\") {}\n"));
    }

    #[test]
    fn test_single_parent_override_is_skipped() {
        let mut c = ContractBuilder::new("MyToken");
        let f = BaseFunction::new("supportsInterface")
            .arg("interfaceId", "bytes4")
            .returns(Argument::ret("bool"))
            .kind(FunctionKind::View);
        let h = c.add_function(&f).unwrap();
        c.add_override(&h, "ERC721").unwrap();
        let text = render(&c.build(), &SoliditySyntax::default());
        assert!(!text.contains("supportsInterface"));
    }

    #[test]
    fn test_multi_parent_override_calls_super() {
        let mut c = ContractBuilder::new("MyToken");
        let f = BaseFunction::new("supportsInterface")
            .arg("interfaceId", "bytes4")
            .returns(Argument::ret("bool"))
            .kind(FunctionKind::View);
        let h = c.add_function(&f).unwrap();
        c.add_override(&h, "ERC721").unwrap();
        c.add_override(&h, "AccessControl").unwrap();
        let text = render(&c.build(), &SoliditySyntax::default());
        assert!(text.contains(
            "    function supportsInterface(bytes4 interfaceId)\n        public\n        view\n        override(ERC721, AccessControl)\n        returns (bool)\n    {\n        return super.supportsInterface(interfaceId);\n    }\n"
        ));
    }

    #[test]
    fn test_code_before_precedes_super_call() {
        let mut c = ContractBuilder::new("MyToken");
        let f = BaseFunction::new("_update")
            .arg("from", "address")
            .arg("to", "address")
            .arg("value", "uint256")
            .kind(FunctionKind::Internal);
        let h = c.add_function(&f).unwrap();
        c.add_override(&h, "ERC20").unwrap();
        c.add_override(&h, "ERC20Pausable").unwrap();
        c.add_function_code_before(&h, "require(to != address(this))")
            .unwrap();
        let text = render(&c.build(), &SoliditySyntax::default());
        assert!(text.contains(
            "    {\n        require(to != address(this));\n        super._update(from, to, value);\n    }\n"
        ));
    }
}
