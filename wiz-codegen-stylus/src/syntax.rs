//! Stylus Rust rendering hooks.
//!
//! The contract is a `#[storage]` struct of borrowed library fields followed
//! by a single `#[public]` impl that inherits them. Impl blocks only group
//! functions into sections inside that impl.

use wizgen_codegen::{
    builder::Indent,
    printer::{FunctionParts, ImportClause, Shell, Syntax, SyntaxTable},
};
use wizgen_core::Version;
use wizgen_ir::{Contract, Function, FunctionKind, Library, Variable};

/// OpenZeppelin Contracts for Stylus release the generated code targets.
pub const CONTRACTS_VERSION: Version = Version::new(0, 1, 0);

#[derive(Debug)]
pub struct StylusSyntax {
    table: SyntaxTable,
}

impl Default for StylusSyntax {
    fn default() -> Self {
        Self::new()
    }
}

impl StylusSyntax {
    pub const fn new() -> Self {
        Self {
            table: SyntaxTable {
                wrap_indent: Some(Indent::TAB),
                trailing_comma: true,
                unterminated_tail: true,
                members_in_shell: false,
                ..SyntaxTable::DEFAULT
            },
        }
    }

    fn self_arg(function: &Function) -> &'static str {
        match function.base.kind {
            FunctionKind::View => "&self",
            FunctionKind::External | FunctionKind::Internal => "&mut self",
        }
    }

    fn storage(&self, contract: &Contract) -> Vec<String> {
        let indent = self.table.indent.as_str();
        if contract.variables().is_empty() {
            return vec![format!("struct {} {{}}", contract.name())];
        }
        let mut lines = vec![format!("struct {} {{", contract.name())];
        for field in contract.variables() {
            lines.push(format!("{indent}#[borrow]"));
            lines.push(format!("{indent}pub {}: {},", field.name, field.ty));
        }
        lines.push("}".to_string());
        lines
    }
}

impl Syntax for StylusSyntax {
    fn table(&self) -> &SyntaxTable {
        &self.table
    }

    fn header(&self, contract: &Contract) -> Vec<String> {
        vec![
            format!("// SPDX-License-Identifier: {}", contract.license()),
            format!(
                "// Compatible with OpenZeppelin Contracts for Stylus {}",
                CONTRACTS_VERSION.caret()
            ),
        ]
    }

    fn import_clause(&self, path: &str, symbols: &[String], wrapped: bool) -> ImportClause {
        if !wrapped && symbols.len() == 1 {
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

    fn contract_shell(&self, contract: &Contract, libraries: &[&Library]) -> Shell {
        let mut open: Vec<String> = contract
            .doc_tags()
            .iter()
            .map(|tag| format!("/// {}: {}", tag.key, tag.value))
            .collect();
        open.push("#[entrypoint]".to_string());
        open.push("#[storage]".to_string());
        open.extend(self.storage(contract));
        open.push(String::new());
        open.push("#[public]".to_string());
        if !libraries.is_empty() {
            let parents: Vec<&str> = libraries.iter().map(|lib| lib.module.name).collect();
            open.push(format!("#[inherit({})]", parents.join(", ")));
        }
        open.push(format!("impl {} {{", contract.name()));
        Shell {
            open,
            close: Some("}".to_string()),
        }
    }

    fn variable(&self, variable: &Variable, _constant: bool) -> String {
        let value = variable.value.as_deref().unwrap_or_default();
        format!("const {}: {} = {};", variable.name, variable.ty, value)
    }

    /// Variables are storage fields and print inside the struct.
    fn members(&self, contract: &Contract) -> Vec<String> {
        contract
            .constants()
            .iter()
            .map(|v| self.variable(v, true))
            .collect()
    }

    fn constructor(&self, _contract: &Contract, _libraries: &[&Library]) -> Vec<FunctionParts> {
        Vec::new()
    }

    fn function(&self, _contract: &Contract, function: &Function) -> Option<FunctionParts> {
        let body = function.body();
        if body.is_empty() {
            return None;
        }
        let base = &function.base;
        let visibility = match base.kind {
            FunctionKind::External | FunctionKind::View => "pub fn",
            FunctionKind::Internal => "fn",
        };
        let params = std::iter::once(Self::self_arg(function).to_string())
            .chain(base.args.iter().map(|arg| match &arg.ty {
                Some(ty) => format!("{}: {}", arg.name, ty),
                None => arg.name.clone(),
            }))
            .collect();
        let suffix = match base.returns.first().and_then(|r| r.ty.as_deref()) {
            Some(ty) => format!(") -> {ty} {{"),
            None => ") {".to_string(),
        };

        Some(FunctionParts {
            attributes: function.guards.iter().map(|g| format!("#[{g}]")).collect(),
            prefix: format!("{} {}(", visibility, base.name),
            params,
            suffix,
            body,
            returns_value: function.returns_value(),
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use wizgen_codegen::printer::render;
    use wizgen_ir::{Argument, ContractBuilder, ImportOptions};

    use super::*;
    use crate::modules::{self, ERC20};

    #[test]
    fn test_empty_contract() {
        let mut c = ContractBuilder::new("MyContract");
        modules::prelude(&mut c).unwrap();
        insta::assert_snapshot!(render(&c.build(), &StylusSyntax::default()), @r"
        // SPDX-License-Identifier: MIT
        // Compatible with OpenZeppelin Contracts for Stylus ^0.1.0

        use stylus_sdk::prelude::{entrypoint, public, storage};

        #[entrypoint]
        #[storage]
        struct MyContract {}

        #[public]
        impl MyContract {}
        ");
    }

    #[test]
    fn test_storage_fields_are_borrowed_and_inherited() {
        let mut c = ContractBuilder::new("MyToken");
        modules::add_storage(&mut c, ERC20, "erc20").unwrap();
        let text = render(&c.build(), &StylusSyntax::default());
        assert!(text.contains(
            "#[entrypoint]\n#[storage]\nstruct MyToken {\n    #[borrow]\n    pub erc20: Erc20,\n}\n\n#[public]\n#[inherit(Erc20)]\nimpl MyToken {}\n"
        ));
    }

    #[test]
    fn test_code_before_then_unterminated_tail() {
        let mut c = ContractBuilder::new("MyToken");
        let f = modules::fallible("burn").arg("value", "U256");
        let handle = modules::add_function(&mut c, &f).unwrap();
        c.set_function_body(&handle, vec!["self.erc20.burn(value).map_err(|e| e.into());".to_string()])
            .unwrap();
        c.add_function_code_before(&handle, "self.pausable.when_not_paused()?")
            .unwrap();

        let text = render(&c.build(), &StylusSyntax::default());
        assert!(text.contains(
            "    pub fn burn(&mut self, value: U256) -> Result<(), Vec<u8>> {\n        self.pausable.when_not_paused()?;\n        self.erc20.burn(value).map_err(|e| e.into())\n    }\n"
        ));
    }

    #[test]
    fn test_view_borrows_self_immutably() {
        let mut c = ContractBuilder::new("MyToken");
        let f = modules::function("paused")
            .kind(FunctionKind::View)
            .returns(Argument::ret("bool"));
        let handle = c.add_function(&f).unwrap();
        c.add_function_code(&handle, "self.pausable.paused()").unwrap();

        let text = render(&c.build(), &StylusSyntax::default());
        assert!(text.contains("    pub fn paused(&self) -> bool {\n        self.pausable.paused()\n    }\n"));
    }

    #[test]
    fn test_long_parameter_list_is_wrapped() {
        let mut c = ContractBuilder::new("MyToken");
        let f = modules::fallible("safe_transfer_from_with_data")
            .arg("from", "Address")
            .arg("to", "Address")
            .arg("token_id", "U256")
            .arg("data", "Bytes")
            .arg("extra_data", "Bytes");
        let handle = c.add_function(&f).unwrap();
        c.add_function_code(&handle, "Ok(())").unwrap();

        let text = render(&c.build(), &StylusSyntax::default());
        assert!(text.contains(
            "    pub fn safe_transfer_from_with_data(\n        &mut self,\n        from: Address,\n        to: Address,\n        token_id: U256,\n        data: Bytes,\n        extra_data: Bytes,\n    ) -> Result<(), Vec<u8>> {\n"
        ));
    }

    #[test]
    fn test_long_use_clause_wraps_with_tabs() {
        let mut c = ContractBuilder::new("MyToken");
        let path = "openzeppelin_stylus::token::erc721::extensions";
        for symbol in ["Erc721Enumerable", "Erc721Metadata", "IErc721Burnable", "IErc721Enumerable"] {
            c.add_import(path, symbol, ImportOptions::default()).unwrap();
        }
        let text = render(&c.build(), &StylusSyntax::default());
        assert!(text.contains(
            "use openzeppelin_stylus::token::erc721::extensions::{\n\tErc721Enumerable, Erc721Metadata, IErc721Burnable, IErc721Enumerable,\n};\n"
        ));
    }
}
