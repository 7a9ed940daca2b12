//! Import-closure resolution.
//!
//! Given the libraries a contract imports directly and a whole-ecosystem
//! dependency graph, compute every library file that must ship alongside
//! the contract.

use std::collections::{BTreeMap, BTreeSet};

use indexmap::IndexMap;
use tracing::debug;

use crate::{Error, Result};

/// Bundled library sources and the import graph between them.
#[derive(Debug, Clone, Default)]
pub struct LibrarySources {
    dependencies: BTreeMap<String, BTreeSet<String>>,
    sources: BTreeMap<String, String>,
}

impl LibrarySources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table from source files, deriving the graph with `extract`,
    /// which returns the resolved paths a file imports.
    pub fn from_sources<I, F>(files: I, extract: F) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
        F: Fn(&str, &str) -> Vec<String>,
    {
        let mut libs = Self::new();
        for (path, text) in files {
            for dependency in extract(&path, &text) {
                libs.add_dependency(&path, &dependency);
            }
            libs.add_source(path, text);
        }
        libs
    }

    pub fn add_source(&mut self, path: impl Into<String>, text: impl Into<String>) {
        self.sources.insert(path.into(), text.into());
    }

    pub fn add_dependency(&mut self, from: &str, to: &str) {
        self.dependencies
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string());
    }

    pub fn source(&self, path: &str) -> Option<&str> {
        self.sources.get(path).map(String::as_str)
    }

    pub fn dependencies_of(&self, path: &str) -> impl Iterator<Item = &str> {
        self.dependencies
            .get(path)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Every file reachable from `roots`, roots included, in sorted order.
    pub fn reachable<'a>(&self, roots: impl IntoIterator<Item = &'a str>) -> BTreeSet<String> {
        let mut closure = BTreeSet::new();
        let mut queue: Vec<String> = Vec::new();
        for root in roots {
            if closure.insert(root.to_string()) {
                queue.push(root.to_string());
            }
        }
        while let Some(current) = queue.pop() {
            for next in self.dependencies_of(&current) {
                if closure.insert(next.to_string()) {
                    queue.push(next.to_string());
                }
            }
        }
        closure
    }
}

/// Expand a generated contract into the full file set.
///
/// The contract comes first, followed by every transitively imported
/// library file in sorted order.
pub fn with_imports(
    file_name: &str,
    contract_source: &str,
    direct_imports: &[String],
    libs: &LibrarySources,
) -> Result<IndexMap<String, String>> {
    let mut files = IndexMap::new();
    files.insert(file_name.to_string(), contract_source.to_string());

    for path in libs.reachable(direct_imports.iter().map(String::as_str)) {
        let source = libs
            .source(&path)
            .ok_or_else(|| Error::MissingSource { path: path.clone() })?;
        files.insert(path, source.to_string());
    }

    debug!(
        contract = file_name,
        direct = direct_imports.len(),
        files = files.len(),
        "resolved import closure"
    );
    Ok(files)
}
