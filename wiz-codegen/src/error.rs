use miette::Diagnostic;
use thiserror::Error;

/// Result type for generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while generating a contract and its file set.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Ir(#[from] wizgen_ir::Error),

    #[error("source for '{path}' not found")]
    #[diagnostic(
        code(wiz::missing_source),
        help("the bundled dependency graph references a file that is not bundled")
    )]
    MissingSource { path: String },

    #[error("unknown {target} contract kind '{kind}'")]
    #[diagnostic(code(wiz::unknown_kind), help("available kinds: {available}"))]
    UnknownKind {
        target: String,
        kind: String,
        available: String,
    },

    #[error("invalid {target} options: {source}")]
    #[diagnostic(code(wiz::invalid_options))]
    InvalidOptions {
        target: String,
        #[source]
        source: serde_json::Error,
    },
}
