use serde::Serialize;

/// A symbol imported from a container path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ImportRef {
    pub path: String,
    pub symbol: String,
    /// Whether this import may share a clause with others from the same path.
    pub groupable: bool,
    pub alias: Option<String>,
}

impl ImportRef {
    /// The name this import binds in the contract's scope.
    pub fn key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.symbol)
    }

    /// Full path used to sort imports within a clause.
    pub fn full_path(&self) -> String {
        format!("{}::{}", self.path, self.symbol)
    }
}

/// Options for [`ContractBuilder::add_import`](crate::ContractBuilder::add_import).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOptions {
    pub groupable: bool,
    pub alias: Option<String>,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            groupable: true,
            alias: None,
        }
    }
}

impl ImportOptions {
    pub fn standalone() -> Self {
        Self {
            groupable: false,
            alias: None,
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}
