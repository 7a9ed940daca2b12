//! Generated files and how they land on disk.

use std::path::{Component, Path, PathBuf};

use eyre::{Result, bail};

/// Outcome of writing one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    /// The file already had exactly this content.
    Unchanged,
    /// The file exists and the rules forbid replacing it.
    Skipped,
}

/// A file addressed relative to an output directory.
///
/// Bundled library files keep their import path (e.g.
/// `@openzeppelin/contracts/access/Ownable.sol`), so the path may contain
/// directories but never leaves the output directory.
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a file that is always (re)written.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Path relative to the output directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file under `base`, creating parent directories.
    ///
    /// Identical content is left untouched so regenerating a contract does
    /// not bump modification times.
    pub fn write_to(&self, base: &Path) -> Result<WriteResult> {
        if !is_contained(&self.path) {
            bail!(
                "Refusing to write {} outside the output directory",
                self.path.display()
            );
        }

        let target = base.join(&self.path);
        if target.exists() {
            if self.rules.overwrite == Overwrite::IfMissing {
                return Ok(WriteResult::Skipped);
            }
            if std::fs::read_to_string(&target).is_ok_and(|old| old == self.content) {
                return Ok(WriteResult::Unchanged);
            }
        }

        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&target, &self.content)?;
        Ok(WriteResult::Written)
    }
}

/// Whether `path` is relative and has no `..` or root components.
fn is_contained(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Replace differing content (generated contract and bundled sources)
    #[default]
    Always,
    /// Only create if the file doesn't exist (wizard.toml)
    IfMissing,
}
