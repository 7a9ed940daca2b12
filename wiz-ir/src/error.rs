use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for IR mutations.
pub type Result<T> = std::result::Result<T, Error>;

/// The kind of declaration involved in a conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Import,
    Library,
    Function,
    Variable,
    Constant,
    ImplBlock,
    AssociatedItem,
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeclarationKind::Import => "import",
            DeclarationKind::Library => "library",
            DeclarationKind::Function => "function",
            DeclarationKind::Variable => "variable",
            DeclarationKind::Constant => "constant",
            DeclarationKind::ImplBlock => "impl block",
            DeclarationKind::AssociatedItem => "associated item",
        };
        f.write_str(s)
    }
}

/// Structural invariant violations raised while composing a contract.
///
/// All of these indicate a bug in feature composition (ordering or feature
/// interaction), never bad user input, so generation aborts on the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error("conflicting declarations of {kind} '{name}': {detail}")]
    #[diagnostic(
        code(wiz::duplicate_declaration),
        help("two features declared '{name}' with different shapes")
    )]
    DuplicateDeclarationConflict {
        kind: DeclarationKind,
        name: String,
        detail: String,
    },

    #[error("function '{0}' is already finalized")]
    #[diagnostic(
        code(wiz::already_finalized),
        help("a function whose body was set with set_function_body cannot receive more code")
    )]
    AlreadyFinalized(String),

    #[error("function '{0}' has additional code")]
    #[diagnostic(
        code(wiz::has_additional_code),
        help("set_function_body must be the only writer of a function body")
    )]
    HasAdditionalCode(String),

    #[error("library call '{call}' in function '{function}' has arguments, which is not supported yet")]
    #[diagnostic(code(wiz::unsupported_library_call))]
    UnsupportedLibraryCallShape { function: String, call: String },

    #[error("module '{0}' has not been added yet")]
    #[diagnostic(code(wiz::module_not_declared))]
    ModuleNotDeclared(String),

    #[error("function '{0}' is not declared in this contract")]
    #[diagnostic(code(wiz::unknown_function))]
    UnknownFunction(String),

    #[error("impl block '{0}' is not declared in this contract")]
    #[diagnostic(code(wiz::unknown_block))]
    UnknownBlock(String),
}

impl Error {
    pub(crate) fn conflict(
        kind: DeclarationKind,
        name: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Error::DuplicateDeclarationConflict {
            kind,
            name: name.into(),
            detail: detail.into(),
        }
    }
}
