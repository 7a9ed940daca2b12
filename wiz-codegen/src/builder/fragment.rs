//! CodeFragment, the intermediate form between printer and text.

/// Represents a fragment of generated code.
///
/// The printer assembles fragments; [`CodeBuilder`](super::CodeBuilder)
/// turns them into indented text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// A block with header lines, body fragments, and optional closing line.
    Block {
        header: Vec<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Indent the contained fragments.
    Indent(Vec<CodeFragment>),
    /// A sequence of fragments.
    Sequence(Vec<CodeFragment>),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a block fragment.
    pub fn block(header: Vec<String>, body: Vec<CodeFragment>, close: Option<String>) -> Self {
        Self::Block {
            header,
            body,
            close,
        }
    }

    /// Create a sequence of lines.
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Sequence(lines.into_iter().map(|l| Self::Line(l.into())).collect())
    }

    /// Whether this fragment produces no output.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Line(_) | Self::Blank | Self::Block { .. } => false,
            Self::Indent(fragments) | Self::Sequence(fragments) => {
                fragments.iter().all(CodeFragment::is_empty)
            }
        }
    }
}
