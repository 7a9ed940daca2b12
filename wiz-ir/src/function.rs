//! Functions and their signatures.

use std::fmt;

use indexmap::IndexSet;
use serde::Serialize;

use crate::Module;

/// How a function is exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionKind {
    #[default]
    External,
    View,
    Internal,
}

/// A named, optionally typed parameter or return value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Argument {
    pub name: String,
    pub ty: Option<String>,
}

impl Argument {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty.into()),
        }
    }

    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
        }
    }

    /// An unnamed return value.
    pub fn ret(ty: impl Into<String>) -> Self {
        Self::new("", ty)
    }
}

/// The declaration of a function, without any body.
///
/// Composers share these through per-ecosystem constant tables so that two
/// features requesting the same function produce identical declarations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BaseFunction {
    pub name: String,
    /// The library this function is exposed from, if any.
    pub module: Option<Module>,
    pub implicit_args: Vec<Argument>,
    pub args: Vec<Argument>,
    pub returns: Vec<Argument>,
    pub kind: FunctionKind,
    /// State mutability keyword beyond what `kind` implies, e.g. `pure`.
    pub mutability: Option<String>,
    /// The body only forwards to the library function of the same name.
    pub passthrough: bool,
    /// Library function name when it differs from `name`.
    pub parent_name: Option<String>,
    /// Impl block this function belongs to; `None` is the contract's own block.
    pub block: Option<String>,
}

impl BaseFunction {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn module(mut self, module: Module) -> Self {
        self.module = Some(module);
        self
    }

    pub fn implicit(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.implicit_args.push(Argument::new(name, ty));
        self
    }

    pub fn arg(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.args.push(Argument::new(name, ty));
        self
    }

    pub fn returns(mut self, ret: Argument) -> Self {
        self.returns.push(ret);
        self
    }

    pub fn kind(mut self, kind: FunctionKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn mutability(mut self, mutability: impl Into<String>) -> Self {
        self.mutability = Some(mutability.into());
        self
    }

    pub fn passthrough(mut self) -> Self {
        self.passthrough = true;
        self
    }

    pub fn parent_name(mut self, name: impl Into<String>) -> Self {
        self.parent_name = Some(name.into());
        self
    }

    pub fn block(mut self, block: impl Into<String>) -> Self {
        self.block = Some(block.into());
        self
    }

    pub fn signature(&self) -> FunctionSignature {
        FunctionSignature {
            name: self.name.clone(),
            args: self.args.iter().map(|a| a.name.clone()).collect(),
        }
    }

    /// Name of the library function this one forwards to.
    pub fn library_name(&self) -> &str {
        self.parent_name.as_deref().unwrap_or(&self.name)
    }

    /// Describe how `other` differs from this declaration, if it does.
    pub(crate) fn shape_mismatch(&self, other: &BaseFunction) -> Option<&'static str> {
        if self.args != other.args {
            Some("argument types differ")
        } else if self.returns != other.returns {
            Some("return values differ")
        } else if self.kind != other.kind || self.mutability != other.mutability {
            Some("function kind differs")
        } else if self.block != other.block {
            Some("declared in different blocks")
        } else if self.implicit_args != other.implicit_args {
            Some("implicit arguments differ")
        } else {
            None
        }
    }
}

/// Function identity: name plus ordered parameter names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FunctionSignature {
    pub name: String,
    pub args: Vec<String>,
}

impl fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.args.join(","))
    }
}

/// Reference to a function declared in a [`ContractBuilder`](crate::ContractBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionHandle(pub(crate) FunctionSignature);

impl FunctionHandle {
    pub fn signature(&self) -> &FunctionSignature {
        &self.0
    }
}

/// A function declared in a contract, with its accumulated body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Function {
    #[serde(flatten)]
    pub base: BaseFunction,
    /// Statements that run before `code`, kept apart so a finalized body
    /// can still gain preconditions.
    pub code_before: Vec<String>,
    pub code: Vec<String>,
    pub guards: IndexSet<String>,
    pub overrides: IndexSet<String>,
    pub library_calls: Vec<BaseFunction>,
    #[serde(rename = "final")]
    pub is_final: bool,
}

impl Function {
    pub(crate) fn new(base: BaseFunction) -> Self {
        Self {
            base,
            code_before: Vec::new(),
            code: Vec::new(),
            guards: IndexSet::new(),
            overrides: IndexSet::new(),
            library_calls: Vec::new(),
            is_final: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.base.name
    }

    pub fn returns_value(&self) -> bool {
        !self.base.returns.is_empty()
    }

    /// `code_before` followed by `code`.
    pub fn body(&self) -> Vec<String> {
        self.code_before.iter().chain(&self.code).cloned().collect()
    }
}
