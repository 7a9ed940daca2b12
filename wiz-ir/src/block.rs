use indexmap::IndexMap;
use serde::Serialize;

use crate::Variable;

/// A group of functions printed together.
///
/// In Solidity and Cairo blocks are unwrapped regions of the contract body;
/// in Soroban each block becomes one `impl`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImplBlock {
    pub name: String,
    /// The implementing type for trait blocks (`impl Pausable for MyToken`).
    pub for_type: Option<String>,
    pub attributes: Vec<String>,
    pub section: Option<String>,
    pub priority: Option<u32>,
    /// Associated types and constants declared at the top of the block.
    pub items: IndexMap<String, Variable>,
}

impl ImplBlock {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            for_type: None,
            attributes: Vec::new(),
            section: None,
            priority: None,
            items: IndexMap::new(),
        }
    }

    pub fn for_type(mut self, ty: impl Into<String>) -> Self {
        self.for_type = Some(ty.into());
        self
    }

    pub fn attribute(mut self, attr: impl Into<String>) -> Self {
        self.attributes.push(attr.into());
        self
    }

    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    pub fn priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }
}
