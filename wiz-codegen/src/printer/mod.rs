//! Deterministic contract printer.
//!
//! [`render`] is a pure function of a frozen contract and a [`Syntax`]:
//! identical input always produces byte-identical text.
//!
//! Layout, top to bottom: header, import clauses, members (inside or outside
//! the contract shell), constructor items, then impl blocks ordered by
//! section and priority. Groups are separated by exactly one blank line.

pub mod imports;
pub mod order;
pub mod statements;
mod syntax;

pub use syntax::{
    FunctionParts, ImportClause, MAX_ARGS_LENGTH, MAX_LINE_LENGTH, Shell, Syntax, SyntaxTable,
};
use wizgen_ir::{Contract, ImplBlock};

use crate::builder::{CodeBuilder, CodeFragment};
use statements::{normalize_blank_lines, space_between, terminate_body};

/// Render a contract to source text, ending with a newline.
pub fn render(contract: &Contract, syntax: &dyn Syntax) -> String {
    let mut out = render_lines(contract, syntax).join("\n");
    out.push('\n');
    out
}

/// Render a contract to source lines.
pub fn render_lines(contract: &Contract, syntax: &dyn Syntax) -> Vec<String> {
    let table = syntax.table();
    let mut builder = CodeBuilder::new(table.indent);
    builder.emit(&layout(contract, syntax));
    let text = builder.build();
    normalize_blank_lines(text.lines())
}

fn layout(contract: &Contract, syntax: &dyn Syntax) -> Vec<CodeFragment> {
    let table = syntax.table();
    let libraries = order::libraries(contract);

    let header = vec![CodeFragment::lines(syntax.header(contract))];
    let imports = vec![CodeFragment::lines(imports::render(
        contract.imports(),
        syntax,
    ))];
    let members = members(contract, syntax);

    let constructor: Vec<Vec<CodeFragment>> = syntax
        .constructor(contract, &libraries)
        .iter()
        .map(|parts| vec![function_fragment(parts, syntax)])
        .collect();
    let (outer_constructor, main_constructor) = if table.constructor_in_main_block {
        (Vec::new(), constructor)
    } else {
        (constructor, Vec::new())
    };

    let mut body_groups = Vec::new();
    let mut top_groups = vec![header, imports];
    if table.members_in_shell {
        body_groups.push(members);
    } else {
        top_groups.push(members);
    }
    body_groups.extend(outer_constructor);
    body_groups.extend(blocks(contract, syntax, main_constructor));

    let shell = syntax.contract_shell(contract, &libraries);
    if shell.close.is_some() {
        top_groups.push(vec![wrap_block(shell, body_groups)]);
    } else {
        top_groups.push(vec![CodeFragment::lines(shell.open)]);
        top_groups.extend(body_groups);
    }
    space_between(top_groups)
}

fn members(contract: &Contract, syntax: &dyn Syntax) -> Vec<CodeFragment> {
    vec![CodeFragment::lines(syntax.members(contract))]
}

fn blocks(
    contract: &Contract,
    syntax: &dyn Syntax,
    mut main_constructor: Vec<Vec<CodeFragment>>,
) -> Vec<Vec<CodeFragment>> {
    let mut groups = Vec::new();
    let mut section: Option<&str> = None;

    for block in order::blocks(contract) {
        if block.section.as_deref() != section {
            section = block.section.as_deref();
            if let Some(name) = section {
                groups.push(vec![CodeFragment::lines(syntax.section_header(name))]);
            }
        }

        let mut items = Vec::new();
        if !block.items.is_empty() {
            let lines = block.items.values().map(|item| syntax.block_item(item));
            items.push(vec![CodeFragment::lines(lines)]);
        }
        if is_main_block(contract, block) {
            items.append(&mut main_constructor);
        }
        for function in contract.functions_in(&block.name) {
            if let Some(parts) = syntax.function(contract, function) {
                items.push(vec![function_fragment(&parts, syntax)]);
            }
        }

        match syntax.block_shell(contract, block) {
            Some(shell) => groups.push(vec![wrap_block(shell, items)]),
            None => groups.extend(items),
        }
    }
    groups
}

fn wrap_block(shell: Shell, items: Vec<Vec<CodeFragment>>) -> CodeFragment {
    let body = space_between(items);
    match (body.is_empty(), shell.close) {
        (true, Some(close)) => CodeFragment::lines(collapse(shell.open, &close)),
        (_, close) => CodeFragment::block(shell.open, body, close),
    }
}

/// Join the last opening line with its closing delimiter: `impl X for Y {}`.
fn collapse(mut open: Vec<String>, close: &str) -> Vec<String> {
    match open.last_mut() {
        Some(last) => last.push_str(close),
        None => open.push(close.to_string()),
    }
    open
}

/// Lay out one function: attributes, head, then terminated statements.
///
/// A parameter list longer than the argument budget is printed one
/// parameter per line. Modifiers follow the head on the same line when it
/// fits the column budget, otherwise one per line before the opening brace.
pub fn function_fragment(parts: &FunctionParts, syntax: &dyn Syntax) -> CodeFragment {
    let table = syntax.table();
    let body: Vec<CodeFragment> = terminate_body(&parts.body, table, parts.returns_value)
        .into_iter()
        .map(CodeFragment::Line)
        .collect();

    let mut head = Vec::new();
    let joined = parts.params.join(", ");
    let close_params = if joined.chars().count() <= table.max_args {
        format!("{}{}{}", parts.prefix, joined, parts.suffix)
    } else {
        let last = parts.params.len().saturating_sub(1);
        let params = parts
            .params
            .iter()
            .enumerate()
            .map(|(i, p)| {
                if i < last || table.trailing_comma {
                    CodeFragment::line(format!("{p},"))
                } else {
                    CodeFragment::line(p.clone())
                }
            })
            .collect();
        head.push(CodeFragment::line(parts.prefix.clone()));
        head.push(CodeFragment::Indent(params));
        parts.suffix.clone()
    };

    let open = if parts.modifiers.is_empty() {
        vec![close_params]
    } else {
        let single = format!("{} {} {{", close_params, parts.modifiers.join(" "));
        if head.is_empty() && single.chars().count() > table.max_line {
            head.push(CodeFragment::line(close_params));
            head.push(CodeFragment::Indent(
                parts.modifiers.iter().cloned().map(CodeFragment::Line).collect(),
            ));
            vec!["{".to_string()]
        } else {
            vec![single]
        }
    };

    let close = "}".to_string();
    let block = if body.is_empty() {
        CodeFragment::lines(collapse(open, &close))
    } else {
        CodeFragment::block(open, body, Some(close))
    };
    CodeFragment::Sequence(vec![
        CodeFragment::lines(parts.attributes.iter().cloned()),
        CodeFragment::Sequence(head),
        block,
    ])
}

/// Whether `block` is the block functions land in by default.
pub fn is_main_block(contract: &Contract, block: &ImplBlock) -> bool {
    block.name == contract.name()
}

#[cfg(test)]
mod tests {
    use wizgen_ir::{
        Argument, BaseFunction, ContractBuilder, Function, ImportOptions, Library, Module, Variable,
    };

    use super::*;

    /// A small brace-and-semicolon syntax used to exercise the layout.
    struct Toy {
        table: SyntaxTable,
    }

    impl Toy {
        fn new() -> Self {
            Self {
                table: SyntaxTable::default(),
            }
        }
    }

    impl Syntax for Toy {
        fn table(&self) -> &SyntaxTable {
            &self.table
        }

        fn header(&self, contract: &Contract) -> Vec<String> {
            vec![format!("// license: {}", contract.license())]
        }

        fn import_clause(&self, path: &str, _symbols: &[String], _wrapped: bool) -> ImportClause {
            ImportClause {
                head: "import {".to_string(),
                tail: format!("}} from \"{path}\";"),
            }
        }

        fn contract_shell(&self, contract: &Contract, libraries: &[&Library]) -> Shell {
            let parents: Vec<_> = libraries.iter().map(|l| l.module.name).collect();
            let is = if parents.is_empty() {
                String::new()
            } else {
                format!(" is {}", parents.join(", "))
            };
            Shell {
                open: vec![format!("contract {}{} {{", contract.name(), is)],
                close: Some("}".to_string()),
            }
        }

        fn variable(&self, variable: &Variable, constant: bool) -> String {
            let kw = if constant { " constant" } else { "" };
            format!("{}{} {};", variable.ty, kw, variable.name)
        }

        fn constructor(&self, contract: &Contract, _libraries: &[&Library]) -> Vec<FunctionParts> {
            if contract.constructor_code().is_empty() {
                return Vec::new();
            }
            vec![FunctionParts {
                prefix: "constructor(".to_string(),
                suffix: ") {".to_string(),
                body: contract.constructor_code().to_vec(),
                ..Default::default()
            }]
        }

        fn function(&self, _contract: &Contract, function: &Function) -> Option<FunctionParts> {
            Some(FunctionParts {
                attributes: Vec::new(),
                prefix: format!("function {}(", function.name()),
                params: function
                    .base
                    .args
                    .iter()
                    .map(|a| format!("{} {}", a.ty.as_deref().unwrap_or("uint256"), a.name))
                    .collect(),
                suffix: format!(
                    ") public{} {{",
                    function
                        .guards
                        .iter()
                        .map(|g| format!(" {g}"))
                        .collect::<String>()
                ),
                body: function.body(),
                returns_value: function.returns_value(),
                ..Default::default()
            })
        }
    }

    fn pause() -> BaseFunction {
        BaseFunction::new("pause")
    }

    #[test]
    fn test_render_minimal() {
        let contract = ContractBuilder::new("Empty").build();
        insta::assert_snapshot!(render(&contract, &Toy::new()).replace('\n', "|"), @"// license: MIT||contract Empty {}|");
    }

    #[test]
    fn test_render_full_layout() {
        let mut c = ContractBuilder::new("MyToken");
        c.add_library(Module::new("ERC20", "erc20.sol"), vec![], &[], true)
            .unwrap();
        c.add_library(Module::new("Ownable", "ownable.sol"), vec![], &[], true)
            .unwrap();
        c.add_constant(Variable::new("MINTER", "bytes32")).unwrap();
        c.add_constructor_code("_mint(msg.sender, 100)");
        let f = c.add_function(&pause()).unwrap();
        c.add_guard(&f, "onlyOwner").unwrap();
        c.add_function_code(&f, "_pause()").unwrap();
        let g = c.add_function(&BaseFunction::new("unpause")).unwrap();
        c.add_guard(&g, "onlyOwner").unwrap();
        c.add_function_code(&g, "_unpause();").unwrap();

        let lines = render_lines(&c.build(), &Toy::new());
        assert_eq!(
            lines,
            vec![
                "// license: MIT",
                "",
                "import {ERC20} from \"erc20.sol\";",
                "import {Ownable} from \"ownable.sol\";",
                "",
                "contract MyToken is ERC20, Ownable {",
                "    bytes32 constant MINTER;",
                "",
                "    constructor() {",
                "        _mint(msg.sender, 100);",
                "    }",
                "",
                "    function pause() public onlyOwner {",
                "        _pause();",
                "    }",
                "",
                "    function unpause() public onlyOwner {",
                "        _unpause();",
                "    }",
                "}",
            ]
        );
    }

    #[test]
    fn test_import_added_twice_renders_once() {
        let mut c = ContractBuilder::new("MyToken");
        c.add_import("a.sol", "A", ImportOptions::default()).unwrap();
        c.add_import("a.sol", "A", ImportOptions::default()).unwrap();
        let text = render(&c.build(), &Toy::new());
        assert_eq!(text.matches("import {A}").count(), 1);
    }

    #[test]
    fn test_function_added_twice_renders_once() {
        let mut c = ContractBuilder::new("MyToken");
        let a = c.add_function(&pause()).unwrap();
        let b = c.add_function(&pause()).unwrap();
        c.add_guard(&a, "onlyOwner").unwrap();
        c.add_guard(&b, "onlyOwner").unwrap();
        c.add_function_code(&a, "_pause()").unwrap();

        let text = render(&c.build(), &Toy::new());
        assert_eq!(text.matches("function pause()").count(), 1);
        assert_eq!(text.matches("onlyOwner").count(), 1);
    }

    #[test]
    fn test_render_is_deterministic() {
        let build = || {
            let mut c = ContractBuilder::new("MyToken");
            c.add_import("z.sol", "Z", ImportOptions::default()).unwrap();
            c.add_import("a.sol", "A", ImportOptions::default()).unwrap();
            let f = c.add_function(&pause()).unwrap();
            c.add_function_code(&f, "_pause()").unwrap();
            c.build()
        };
        assert_eq!(render(&build(), &Toy::new()), render(&build(), &Toy::new()));
    }

    #[test]
    fn test_long_parameter_list_is_wrapped() {
        let mut c = ContractBuilder::new("MyToken");
        let f = BaseFunction::new("permitAndTransfer")
            .arg("owner", "address")
            .arg("spender", "address")
            .arg("value", "uint256")
            .arg("deadline", "uint256")
            .arg("permitSignature", "bytes");
        let h = c.add_function(&f).unwrap();
        c.add_function_code(&h, "_permit()").unwrap();

        let lines = render_lines(&c.build(), &Toy::new());
        let start = lines
            .iter()
            .position(|l| l.contains("function permitAndTransfer("))
            .unwrap();
        assert_eq!(
            &lines[start..start + 8],
            &[
                "    function permitAndTransfer(",
                "        address owner,",
                "        address spender,",
                "        uint256 value,",
                "        uint256 deadline,",
                "        bytes permitSignature",
                "    ) public {",
                "        _permit();",
            ]
        );
    }

    #[test]
    fn test_long_modifier_list_is_wrapped() {
        let parts = FunctionParts {
            prefix: "function _update(".to_string(),
            params: vec![
                "address from".to_string(),
                "address to".to_string(),
                "uint256 value".to_string(),
            ],
            suffix: ")".to_string(),
            modifiers: vec![
                "internal".to_string(),
                "override(ERC20, ERC20Pausable)".to_string(),
            ],
            body: vec!["super._update(from, to, value)".to_string()],
            ..Default::default()
        };
        let mut builder = CodeBuilder::new(crate::builder::Indent::FOUR);
        builder.emit(&[function_fragment(&parts, &Toy::new())]);
        assert_eq!(
            builder.build(),
            "function _update(address from, address to, uint256 value)\n    internal\n    override(ERC20, ERC20Pausable)\n{\n    super._update(from, to, value);\n}\n"
        );

        let short = FunctionParts {
            prefix: "function pause(".to_string(),
            suffix: ")".to_string(),
            modifiers: vec!["public".to_string(), "onlyOwner".to_string()],
            ..Default::default()
        };
        let mut builder = CodeBuilder::new(crate::builder::Indent::FOUR);
        builder.emit(&[function_fragment(&short, &Toy::new())]);
        assert_eq!(builder.build(), "function pause() public onlyOwner {}\n");
    }

    #[test]
    fn test_sections_and_wrapped_blocks() {
        struct Blocks(Toy);
        impl Syntax for Blocks {
            fn table(&self) -> &SyntaxTable {
                self.0.table()
            }
            fn header(&self, c: &Contract) -> Vec<String> {
                self.0.header(c)
            }
            fn import_clause(&self, p: &str, s: &[String], w: bool) -> ImportClause {
                self.0.import_clause(p, s, w)
            }
            fn contract_shell(&self, c: &Contract, _l: &[&Library]) -> Shell {
                Shell {
                    open: vec![format!("struct {};", c.name())],
                    close: None,
                }
            }
            fn variable(&self, v: &Variable, k: bool) -> String {
                self.0.variable(v, k)
            }
            fn constructor(&self, c: &Contract, l: &[&Library]) -> Vec<FunctionParts> {
                self.0.constructor(c, l)
            }
            fn function(&self, c: &Contract, f: &Function) -> Option<FunctionParts> {
                self.0.function(c, f)
            }
            fn block_shell(&self, c: &Contract, b: &ImplBlock) -> Option<Shell> {
                if is_main_block(c, b) {
                    return None;
                }
                Some(Shell {
                    open: vec![format!("impl {} for {} {{", b.name, c.name())],
                    close: Some("}".to_string()),
                })
            }
        }

        let mut c = ContractBuilder::new("MyToken");
        c.add_impl_block(ImplBlock::new("Burnable").section("Extensions"))
            .unwrap();
        c.add_impl_block(ImplBlock::new("Token").priority(1)).unwrap();
        c.add_block_item("Token", Variable::new("ContractType", "type").value("Base"))
            .unwrap();

        let lines = render_lines(&c.build(), &Blocks(Toy::new()));
        assert_eq!(
            lines,
            vec![
                "// license: MIT",
                "",
                "struct MyToken;",
                "",
                "impl Token for MyToken {",
                "    type ContractType = Base;",
                "}",
                "",
                "//",
                "// Extensions",
                "//",
                "",
                "impl Burnable for MyToken {}",
            ]
        );
    }

    #[test]
    fn test_constructor_arguments_are_not_reordered() {
        let mut c = ContractBuilder::new("MyToken");
        c.add_constructor_argument(Argument::new("b", "address"));
        c.add_constructor_argument(Argument::new("a", "address"));
        let contract = c.build();
        let names: Vec<_> = contract
            .constructor_args()
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
