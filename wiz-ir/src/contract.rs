//! The mutable contract builder and the frozen contract it produces.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use wizgen_core::{Value, to_identifier};

use crate::{
    Argument, BaseFunction, DeclarationKind, Error, Function, FunctionHandle, FunctionSignature,
    ImplBlock, ImportOptions, ImportRef, Initializer, Library, Module, Result, Variable,
};

/// A documentation tag printed above the contract declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocTag {
    pub key: String,
    pub value: String,
}

/// Accumulates the features of one contract.
///
/// Every operation either merges into existing state or fails with an
/// [`Error`]; nothing is silently duplicated or dropped. Call
/// [`build`](Self::build) to freeze the result.
#[derive(Debug, Clone)]
pub struct ContractBuilder {
    name: String,
    license: String,
    upgradeable: bool,
    imports: IndexMap<String, ImportRef>,
    libraries: IndexMap<&'static str, Library>,
    blocks: IndexMap<String, ImplBlock>,
    functions: IndexMap<FunctionSignature, Function>,
    constructor_args: IndexMap<String, Argument>,
    constructor_code: Vec<String>,
    variables: IndexMap<String, Variable>,
    constants: IndexMap<String, Variable>,
    interface_flags: IndexSet<String>,
    doc_tags: Vec<DocTag>,
}

impl ContractBuilder {
    /// Create an empty contract. The name is coerced into a valid identifier.
    pub fn new(name: &str) -> Self {
        let name = to_identifier(name, true);
        let mut blocks = IndexMap::new();
        blocks.insert(name.clone(), ImplBlock::new(name.clone()).priority(0));

        Self {
            name,
            license: "MIT".to_string(),
            upgradeable: false,
            imports: IndexMap::new(),
            libraries: IndexMap::new(),
            blocks,
            functions: IndexMap::new(),
            constructor_args: IndexMap::new(),
            constructor_code: Vec::new(),
            variables: IndexMap::new(),
            constants: IndexMap::new(),
            interface_flags: IndexSet::new(),
            doc_tags: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the block that holds functions declared without one.
    pub fn main_block(&self) -> &str {
        &self.name
    }

    pub fn set_license(&mut self, license: impl Into<String>) {
        self.license = license.into();
    }

    pub fn set_upgradeable(&mut self, upgradeable: bool) {
        self.upgradeable = upgradeable;
    }

    pub fn is_upgradeable(&self) -> bool {
        self.upgradeable
    }

    pub fn add_doc_tag(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let tag = DocTag {
            key: key.into(),
            value: value.into(),
        };
        if !self.doc_tags.contains(&tag) {
            self.doc_tags.push(tag);
        }
    }

    /// Bring `symbol` from `path` into scope.
    ///
    /// Re-adding the same import is a no-op. Binding the same name to a
    /// different path or symbol is a conflict.
    pub fn add_import(&mut self, path: &str, symbol: &str, options: ImportOptions) -> Result<()> {
        let import = ImportRef {
            path: path.to_string(),
            symbol: symbol.to_string(),
            groupable: options.groupable,
            alias: options.alias,
        };
        match self.imports.get(import.key()) {
            Some(existing) if existing.path == import.path && existing.symbol == import.symbol => {
                Ok(())
            }
            Some(existing) => Err(Error::conflict(
                DeclarationKind::Import,
                import.key(),
                format!(
                    "bound to '{}' and '{}'",
                    existing.full_path(),
                    import.full_path()
                ),
            )),
            None => {
                self.imports.insert(import.key().to_string(), import);
                Ok(())
            }
        }
    }

    /// Include a library module. Returns `true` on first insertion.
    ///
    /// The parameters of the first initializable inclusion win; a later call
    /// with different non-empty parameters is a conflict. `functions` are
    /// exposed through the module in every case.
    pub fn add_library(
        &mut self,
        module: Module,
        params: Vec<Value>,
        functions: &[&str],
        initializable: bool,
    ) -> Result<bool> {
        let first = match self.libraries.get_mut(module.name) {
            Some(lib) => {
                if lib.module != module {
                    return Err(Error::conflict(
                        DeclarationKind::Library,
                        module.name,
                        format!("declared from '{}' and '{}'", lib.module.path, module.path),
                    ));
                }
                if initializable {
                    let differs = lib.initializer.as_ref().map(|init| init.params != params);
                    match differs {
                        Some(true) if !params.is_empty() => {
                            return Err(Error::conflict(
                                DeclarationKind::Library,
                                module.name,
                                "constructor parameters differ",
                            ));
                        }
                        Some(_) => {}
                        None => lib.initializer = Some(Initializer { params }),
                    }
                }
                false
            }
            None => {
                self.libraries
                    .insert(module.name, Library::new(module, params, initializable));
                if module.use_prefix {
                    self.add_import(module.path, module.name, ImportOptions::default())?;
                }
                true
            }
        };

        for function in functions {
            self.add_module_function(module, function)?;
        }
        Ok(first)
    }

    pub fn has_library(&self, module: Module) -> bool {
        self.libraries.contains_key(module.name)
    }

    /// Expose `name` through an already included module.
    pub fn add_module_function(&mut self, module: Module, name: &str) -> Result<()> {
        let lib = self
            .libraries
            .get_mut(module.name)
            .ok_or_else(|| Error::ModuleNotDeclared(module.name.to_string()))?;
        let inserted = lib.functions.insert(name.to_string());
        let imports_functions = !lib.module.use_prefix;
        let path = lib.module.path;

        if inserted && imports_functions {
            self.add_import(path, name, ImportOptions::default())?;
        }
        Ok(())
    }

    /// Declare an impl block. Re-declaring merges attributes; a different
    /// target, section or priority is a conflict.
    pub fn add_impl_block(&mut self, block: ImplBlock) -> Result<bool> {
        match self.blocks.get_mut(&block.name) {
            Some(existing) => {
                if existing.for_type != block.for_type
                    || existing.section != block.section
                    || existing.priority != block.priority
                {
                    return Err(Error::conflict(
                        DeclarationKind::ImplBlock,
                        &block.name,
                        "declared with a different target, section or priority",
                    ));
                }
                for attr in block.attributes {
                    if !existing.attributes.contains(&attr) {
                        existing.attributes.push(attr);
                    }
                }
                Ok(false)
            }
            None => {
                self.blocks.insert(block.name.clone(), block);
                Ok(true)
            }
        }
    }

    pub fn add_block_attribute(&mut self, block: &str, attr: &str) -> Result<()> {
        let block = self.block_mut(block)?;
        if !block.attributes.iter().any(|a| a == attr) {
            block.attributes.push(attr.to_string());
        }
        Ok(())
    }

    /// Declare an associated type or constant inside a block.
    pub fn add_block_item(&mut self, block: &str, item: Variable) -> Result<bool> {
        let block = self.block_mut(block)?;
        insert_variable(&mut block.items, item, DeclarationKind::AssociatedItem)
    }

    fn block_mut(&mut self, name: &str) -> Result<&mut ImplBlock> {
        self.blocks
            .get_mut(name)
            .ok_or_else(|| Error::UnknownBlock(name.to_string()))
    }

    /// Declare a function, or look up the existing one with the same signature.
    pub fn add_function(&mut self, base: &BaseFunction) -> Result<FunctionHandle> {
        if let Some(block) = &base.block {
            if !self.blocks.contains_key(block) {
                return Err(Error::UnknownBlock(block.clone()));
            }
        }

        let signature = base.signature();
        match self.functions.get(&signature) {
            Some(existing) => {
                if let Some(detail) = existing.base.shape_mismatch(base) {
                    return Err(Error::conflict(
                        DeclarationKind::Function,
                        signature.to_string(),
                        detail,
                    ));
                }
            }
            None => {
                self.functions
                    .insert(signature.clone(), Function::new(base.clone()));
            }
        }
        Ok(FunctionHandle(signature))
    }

    pub fn has_function(&self, base: &BaseFunction) -> bool {
        self.functions.contains_key(&base.signature())
    }

    fn function_mut(&mut self, handle: &FunctionHandle) -> Result<&mut Function> {
        self.functions
            .get_mut(&handle.0)
            .ok_or_else(|| Error::UnknownFunction(handle.0.to_string()))
    }

    /// Append one statement to a function body.
    pub fn add_function_code(&mut self, handle: &FunctionHandle, line: impl Into<String>) -> Result<()> {
        let function = self.function_mut(handle)?;
        if function.is_final {
            return Err(Error::AlreadyFinalized(handle.0.to_string()));
        }
        function.code.push(line.into());
        Ok(())
    }

    /// Add a statement that runs before the body. Allowed on finalized
    /// functions; repeated statements are kept once.
    pub fn add_function_code_before(
        &mut self,
        handle: &FunctionHandle,
        line: impl Into<String>,
    ) -> Result<()> {
        let line = line.into();
        let function = self.function_mut(handle)?;
        if !function.code_before.contains(&line) {
            function.code_before.push(line);
        }
        Ok(())
    }

    /// Replace a function body and finalize it.
    pub fn set_function_body(&mut self, handle: &FunctionHandle, code: Vec<String>) -> Result<()> {
        let function = self.function_mut(handle)?;
        if function.is_final {
            return Err(Error::AlreadyFinalized(handle.0.to_string()));
        }
        if !function.code.is_empty() {
            return Err(Error::HasAdditionalCode(handle.0.to_string()));
        }
        function.code = code;
        function.is_final = true;
        Ok(())
    }

    pub fn add_guard(&mut self, handle: &FunctionHandle, guard: &str) -> Result<()> {
        self.function_mut(handle)?.guards.insert(guard.to_string());
        Ok(())
    }

    pub fn add_override(&mut self, handle: &FunctionHandle, parent: &str) -> Result<()> {
        self.function_mut(handle)?
            .overrides
            .insert(parent.to_string());
        Ok(())
    }

    /// Call a library function at the start of `handle`'s body.
    ///
    /// Only argument-less calls are supported. The call is exposed through
    /// its module, which must already be included.
    pub fn add_library_call(&mut self, call: &BaseFunction, handle: &FunctionHandle) -> Result<()> {
        if !call.args.is_empty() {
            return Err(Error::UnsupportedLibraryCallShape {
                function: handle.0.to_string(),
                call: call.name.clone(),
            });
        }
        if let Some(module) = call.module {
            self.add_module_function(module, call.library_name())?;
        }

        let function = self.function_mut(handle)?;
        if !function.library_calls.iter().any(|c| c.name == call.name) {
            function.library_calls.push(call.clone());
        }
        Ok(())
    }

    /// Add a constructor argument. The first declaration of a name wins.
    pub fn add_constructor_argument(&mut self, arg: Argument) {
        self.constructor_args.entry(arg.name.clone()).or_insert(arg);
    }

    pub fn add_constructor_code(&mut self, line: impl Into<String>) {
        self.constructor_code.push(line.into());
    }

    /// Declare a state variable. Returns `false` if it was already declared.
    pub fn add_variable(&mut self, variable: Variable) -> Result<bool> {
        insert_variable(&mut self.variables, variable, DeclarationKind::Variable)
    }

    pub fn add_constant(&mut self, constant: Variable) -> Result<bool> {
        insert_variable(&mut self.constants, constant, DeclarationKind::Constant)
    }

    pub fn add_interface_flag(&mut self, flag: &str) -> bool {
        self.interface_flags.insert(flag.to_string())
    }

    pub fn has_interface_flag(&self, flag: &str) -> bool {
        self.interface_flags.contains(flag)
    }

    /// Freeze the builder into an immutable contract.
    pub fn build(self) -> Contract {
        Contract {
            name: self.name,
            license: self.license,
            upgradeable: self.upgradeable,
            imports: self.imports.into_values().collect(),
            libraries: self.libraries.into_values().collect(),
            blocks: self.blocks.into_values().collect(),
            functions: self.functions.into_values().collect(),
            constructor_args: self.constructor_args.into_values().collect(),
            constructor_code: self.constructor_code,
            variables: self.variables.into_values().collect(),
            constants: self.constants.into_values().collect(),
            interface_flags: self.interface_flags.into_iter().collect(),
            doc_tags: self.doc_tags,
        }
    }
}

fn insert_variable(
    map: &mut IndexMap<String, Variable>,
    variable: Variable,
    kind: DeclarationKind,
) -> Result<bool> {
    match map.get(&variable.name) {
        Some(existing) if existing.same_shape(&variable) => Ok(false),
        Some(existing) if existing.ty != variable.ty => Err(Error::conflict(
            kind,
            &variable.name,
            format!("declared as '{}' and '{}'", existing.ty, variable.ty),
        )),
        Some(existing) => Err(Error::conflict(
            kind,
            &variable.name,
            format!(
                "valued '{}' and '{}'",
                existing.value.as_deref().unwrap_or_default(),
                variable.value.as_deref().unwrap_or_default()
            ),
        )),
        None => {
            map.insert(variable.name.clone(), variable);
            Ok(true)
        }
    }
}

/// A finished contract, ready to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contract {
    name: String,
    license: String,
    upgradeable: bool,
    imports: Vec<ImportRef>,
    libraries: Vec<Library>,
    blocks: Vec<ImplBlock>,
    functions: Vec<Function>,
    constructor_args: Vec<Argument>,
    constructor_code: Vec<String>,
    variables: Vec<Variable>,
    constants: Vec<Variable>,
    interface_flags: Vec<String>,
    doc_tags: Vec<DocTag>,
}

impl Contract {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn license(&self) -> &str {
        &self.license
    }

    pub fn is_upgradeable(&self) -> bool {
        self.upgradeable
    }

    pub fn imports(&self) -> &[ImportRef] {
        &self.imports
    }

    /// Libraries in insertion order.
    pub fn libraries(&self) -> &[Library] {
        &self.libraries
    }

    pub fn blocks(&self) -> &[ImplBlock] {
        &self.blocks
    }

    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    /// Functions belonging to `block`, in declaration order.
    pub fn functions_in<'a>(&'a self, block: &'a str) -> impl Iterator<Item = &'a Function> + 'a {
        self.functions
            .iter()
            .filter(move |f| f.base.block.as_deref().unwrap_or(self.name.as_str()) == block)
    }

    pub fn constructor_args(&self) -> &[Argument] {
        &self.constructor_args
    }

    pub fn constructor_code(&self) -> &[String] {
        &self.constructor_code
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn constants(&self) -> &[Variable] {
        &self.constants
    }

    pub fn interface_flags(&self) -> &[String] {
        &self.interface_flags
    }

    pub fn has_interface_flag(&self, flag: &str) -> bool {
        self.interface_flags.iter().any(|f| f == flag)
    }

    pub fn doc_tags(&self) -> &[DocTag] {
        &self.doc_tags
    }
}
