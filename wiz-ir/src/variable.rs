use serde::Serialize;

/// A state variable, constant or associated item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variable {
    pub name: String,
    pub ty: String,
    pub value: Option<String>,
    pub comment: Option<String>,
}

impl Variable {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            value: None,
            comment: None,
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Whether two declarations describe the same item, ignoring comments.
    pub(crate) fn same_shape(&self, other: &Variable) -> bool {
        self.ty == other.ty && self.value == other.value
    }
}
