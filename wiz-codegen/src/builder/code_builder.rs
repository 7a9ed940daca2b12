//! Turns laid-out fragments into indented text.

use super::{CodeFragment, Indent};

/// Accumulates indented source text from [`CodeFragment`]s.
///
/// ```
/// use wizgen_codegen::builder::{CodeBuilder, CodeFragment, Indent};
///
/// let mut builder = CodeBuilder::new(Indent::FOUR);
/// builder.emit(&[CodeFragment::block(
///     vec!["contract MyToken {".to_string()],
///     vec![CodeFragment::line("uint256 public total;")],
///     Some("}".to_string()),
/// )]);
///
/// assert_eq!(builder.build(), "contract MyToken {\n    uint256 public total;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    depth: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Append fragments at the current depth.
    pub fn emit(&mut self, fragments: &[CodeFragment]) -> &mut Self {
        for fragment in fragments {
            match fragment {
                CodeFragment::Line(s) => self.line(s),
                // Blank lines carry no indentation.
                CodeFragment::Blank => self.buffer.push('\n'),
                CodeFragment::Block {
                    header,
                    body,
                    close,
                } => {
                    for line in header {
                        self.line(line);
                    }
                    self.nested(body);
                    if let Some(close) = close {
                        self.line(close);
                    }
                }
                CodeFragment::Indent(fragments) => self.nested(fragments),
                CodeFragment::Sequence(fragments) => {
                    self.emit(fragments);
                }
            }
        }
        self
    }

    /// Consume the builder and return the text.
    pub fn build(self) -> String {
        self.buffer
    }

    fn nested(&mut self, fragments: &[CodeFragment]) {
        self.depth += 1;
        self.emit(fragments);
        self.depth -= 1;
    }

    fn line(&mut self, s: &str) {
        for _ in 0..self.depth {
            self.buffer.push_str(self.indent.as_str());
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }
}
