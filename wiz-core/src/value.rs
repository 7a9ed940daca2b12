//! Argument values passed to constructors and initializers.

use std::fmt;

use serde::Serialize;

/// A value used as a constructor or initializer argument.
///
/// Strings are user-supplied text and are quoted by the target syntax when
/// printed. Literals are computed expressions emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    /// A string to be printed as a quoted literal.
    String(String),
    /// An unsigned numeric literal.
    Number(u128),
    /// A computed expression, printed as-is.
    Literal(String),
    /// A value preceded by an explanatory inline comment.
    Noted { note: String, value: Box<Value> },
}

impl Value {
    /// Create a string value.
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    /// Create a literal expression value.
    pub fn lit(s: impl Into<String>) -> Self {
        Self::Literal(s.into())
    }

    /// Attach an inline note to a value.
    pub fn noted(note: impl Into<String>, value: Value) -> Self {
        Self::Noted {
            note: note.into(),
            value: Box::new(value),
        }
    }

    /// Render the value, using `quote` to turn strings into literals.
    pub fn render_with(&self, quote: &dyn Fn(&str) -> String) -> String {
        match self {
            Value::String(s) => quote(s),
            Value::Number(n) => n.to_string(),
            Value::Literal(s) => s.clone(),
            Value::Noted { note, value } => {
                format!("/* {} */ {}", note, value.render_with(quote))
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<u128> for Value {
    fn from(n: u128) -> Self {
        Self::Number(n)
    }
}

/// Renders with double-quoted strings.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quote = |s: &str| format!("\"{}\"", crate::escape_string(s, '"'));
        write!(f, "{}", self.render_with(&quote))
    }
}
