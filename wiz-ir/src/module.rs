//! Library modules and their inclusion in a contract.

use indexmap::IndexSet;
use serde::Serialize;
use wizgen_core::Value;

/// A library module that features can bring into a contract.
///
/// Identity is the module `name`. The same constant referenced by two
/// features merges into one inclusion; declaring the same name with a
/// different path is a conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Module {
    pub name: &'static str,
    pub path: &'static str,
    /// Whether functions are called through the module namespace
    /// (`Pausable.pause()`) or imported individually and called bare.
    pub use_prefix: bool,
    /// Whether this library must be initialized before all others.
    pub initializes_first: bool,
}

impl Module {
    pub const fn new(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            path,
            use_prefix: true,
            initializes_first: false,
        }
    }

    /// Import the exposed functions individually instead of the module name.
    pub const fn without_prefix(mut self) -> Self {
        self.use_prefix = false;
        self
    }

    pub const fn first(mut self) -> Self {
        self.initializes_first = true;
        self
    }
}

/// Arguments passed to a library's initializer or base constructor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Initializer {
    pub params: Vec<Value>,
}

/// A module included in a contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Library {
    pub module: Module,
    /// Functions brought into scope through this library.
    pub functions: IndexSet<String>,
    /// Present when the library takes part in construction.
    pub initializer: Option<Initializer>,
}

impl Library {
    pub(crate) fn new(module: Module, params: Vec<Value>, initializable: bool) -> Self {
        Self {
            module,
            functions: IndexSet::new(),
            initializer: initializable.then_some(Initializer { params }),
        }
    }

    /// Constructor parameters; empty for libraries without an initializer.
    pub fn params(&self) -> &[Value] {
        self.initializer
            .as_ref()
            .map(|init| init.params.as_slice())
            .unwrap_or_default()
    }

    pub fn is_initializable(&self) -> bool {
        self.initializer.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAUSABLE: Module = Module::new("Pausable", "@openzeppelin/contracts/utils/Pausable.sol");

    #[test]
    fn test_module_builders() {
        let module = PAUSABLE.without_prefix().first();
        assert!(!module.use_prefix);
        assert!(module.initializes_first);
        assert_eq!(module.name, "Pausable");
    }

    #[test]
    fn test_library_params() {
        let lib = Library::new(PAUSABLE, vec![Value::string("x")], true);
        assert!(lib.is_initializable());
        assert_eq!(lib.params(), &[Value::string("x")]);

        let lib = Library::new(PAUSABLE, vec![Value::string("x")], false);
        assert!(!lib.is_initializable());
        assert!(lib.params().is_empty());
    }
}
