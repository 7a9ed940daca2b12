//! Per-target syntax: a data table plus rendering hooks.

use wizgen_core::{Value, escape_string};
use wizgen_ir::{Contract, Function, ImplBlock, Library, Variable};

use crate::builder::Indent;

/// Column budget for import clauses.
pub const MAX_LINE_LENGTH: usize = 90;

/// Parameter lists longer than this are printed one parameter per line.
pub const MAX_ARGS_LENGTH: usize = 80;

/// Target formatting constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxTable {
    pub terminator: &'static str,
    pub comment: &'static str,
    pub doc: &'static str,
    pub indent: Indent,
    /// Indent of wrapped import continuation lines, when it differs from
    /// `indent`.
    pub wrap_indent: Option<Indent>,
    pub max_line: usize,
    pub max_args: usize,
    /// Whether import clauses over the column budget are wrapped.
    pub wrap_imports: bool,
    /// Whether wrapped lists keep a comma after their last element.
    pub trailing_comma: bool,
    /// Whether the last statement of a value-returning function stays
    /// unterminated, as in Rust tail expressions.
    pub unterminated_tail: bool,
    /// Whether variables and constants live inside the contract shell.
    pub members_in_shell: bool,
    /// Whether the constructor is printed inside the contract's main block.
    pub constructor_in_main_block: bool,
}

impl SyntaxTable {
    /// Brace-and-semicolon defaults; targets override what differs.
    pub const DEFAULT: SyntaxTable = SyntaxTable {
        terminator: ";",
        comment: "//",
        doc: "///",
        indent: Indent::FOUR,
        wrap_indent: None,
        max_line: MAX_LINE_LENGTH,
        max_args: MAX_ARGS_LENGTH,
        wrap_imports: true,
        trailing_comma: false,
        unterminated_tail: false,
        members_in_shell: true,
        constructor_in_main_block: false,
    };
}

impl Default for SyntaxTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// An import clause split around its symbol list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportClause {
    /// Text before the symbols. When wrapped, ends with the opening delimiter.
    pub head: String,
    /// Text after the symbols. When wrapped, starts with the closing delimiter.
    pub tail: String,
}

/// A function-shaped item ready for layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionParts {
    /// Lines above the head: decorators, attributes, doc tags.
    pub attributes: Vec<String>,
    /// Head text up to and including the opening parenthesis.
    pub prefix: String,
    pub params: Vec<String>,
    /// Head text from the closing parenthesis on. Includes the opening
    /// brace unless `modifiers` is non-empty, in which case the printer
    /// adds it after the modifiers.
    pub suffix: String,
    /// Modifier words, printed one per line when the head is too long.
    pub modifiers: Vec<String>,
    /// Statements, terminated by the printer.
    pub body: Vec<String>,
    pub returns_value: bool,
}

/// Lines that open and close a container such as a contract or impl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    pub open: Vec<String>,
    /// `None` means the body is not wrapped or indented.
    pub close: Option<String>,
}

/// Rendering hooks for one target language.
///
/// The printer owns ordering, grouping, wrapping, statement termination and
/// blank lines; implementations only shape individual pieces.
pub trait Syntax {
    fn table(&self) -> &SyntaxTable;

    /// Quote a user-supplied string as a literal.
    fn quote(&self, s: &str) -> String {
        format!("\"{}\"", escape_string(s, '"'))
    }

    fn value(&self, value: &Value) -> String {
        value.render_with(&|s: &str| self.quote(s))
    }

    /// License, pragma and other leading lines.
    fn header(&self, contract: &Contract) -> Vec<String>;

    fn import_clause(&self, path: &str, symbols: &[String], wrapped: bool) -> ImportClause;

    fn contract_shell(&self, contract: &Contract, libraries: &[&Library]) -> Shell;

    fn variable(&self, variable: &Variable, constant: bool) -> String;

    /// Constants then variables, one line each.
    fn members(&self, contract: &Contract) -> Vec<String> {
        let constants = contract.constants().iter().map(|v| self.variable(v, true));
        let variables = contract.variables().iter().map(|v| self.variable(v, false));
        constants.chain(variables).collect()
    }

    /// Constructor and initializer items, in print order.
    fn constructor(&self, contract: &Contract, libraries: &[&Library]) -> Vec<FunctionParts>;

    /// Shape a function, or `None` when it has nothing to print.
    fn function(&self, contract: &Contract, function: &Function) -> Option<FunctionParts>;

    /// Wrapper for a non-main block; `None` prints its functions unwrapped.
    fn block_shell(&self, _contract: &Contract, _block: &ImplBlock) -> Option<Shell> {
        None
    }

    fn block_item(&self, item: &Variable) -> String {
        let value = item.value.as_deref().unwrap_or_default();
        if item.ty == "type" {
            format!("type {} = {};", item.name, value)
        } else {
            format!("const {}: {} = {};", item.name, item.ty, value)
        }
    }

    fn section_header(&self, section: &str) -> Vec<String> {
        let c = self.table().comment;
        vec![c.to_string(), format!("{c} {section}"), c.to_string()]
    }
}
