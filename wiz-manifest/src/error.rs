use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source text and file name a diagnostic points into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    pub fn unknown_target_error(
        &self,
        target: impl Into<String>,
        available: &[&str],
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownTarget {
            src: self.named_source(),
            span,
            target: target.into(),
            available: available.join(", "),
        })
    }

    pub fn unknown_kind_error(
        &self,
        target: impl Into<String>,
        kind: impl Into<String>,
        available: &[&str],
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownKind {
            src: self.named_source(),
            span,
            target: target.into(),
            kind: kind.into(),
            available: available.join(", "),
        })
    }

    pub fn invalid_options_error(
        &self,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidOptions {
            src: self.named_source(),
            span,
            reason: reason.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'wiz init' to create a wizard.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse wizard.toml")]
    #[diagnostic(code(wiz::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown target '{target}'")]
    #[diagnostic(code(wiz::unknown_target), help("available targets: {available}"))]
    UnknownTarget {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown target")]
        span: Option<SourceSpan>,
        target: String,
        available: String,
    },

    #[error("unknown {target} contract kind '{kind}'")]
    #[diagnostic(code(wiz::unknown_kind), help("available kinds: {available}"))]
    UnknownKind {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown kind")]
        span: Option<SourceSpan>,
        target: String,
        kind: String,
        available: String,
    },

    #[error("invalid contract options")]
    #[diagnostic(
        code(wiz::invalid_options),
        help("{reason}. Run 'wiz list' to see the options of each kind.")
    )]
    InvalidOptions {
        #[source_code]
        src: NamedSource<String>,
        #[label("in this table")]
        span: Option<SourceSpan>,
        reason: String,
    },

    #[error("{message}")]
    #[diagnostic(code(wiz::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}
