//! Init operation - write a starter wizard.toml.

use std::path::{Path, PathBuf};

use eyre::{Result, bail};
use wizgen_codegen::Target;
use wizgen_core::{File, FileRules, Overwrite, WriteResult};
use wizgen_manifest::{FILE_NAME, template};

/// Options for the init operation.
pub struct InitOptions<'a> {
    pub dir: &'a Path,
    /// Contract kind; the target's first kind when absent.
    pub kind: Option<&'a str>,
    pub name: &'a str,
    /// Replace an existing wizard.toml.
    pub force: bool,
}

/// Write a wizard.toml for `target` into `opts.dir`.
pub fn init(target: &dyn Target, opts: InitOptions) -> Result<(PathBuf, WriteResult)> {
    let kinds = target.kinds();
    let kind = match opts.kind {
        Some(kind) if kinds.contains(&kind) => kind,
        Some(kind) => bail!(
            "Unknown {} contract kind '{kind}' (available: {})",
            target.name(),
            kinds.join(", ")
        ),
        None => match kinds.first() {
            Some(kind) => *kind,
            None => bail!("Target '{}' has no contract kinds", target.name()),
        },
    };

    let overwrite = if opts.force {
        Overwrite::Always
    } else {
        Overwrite::IfMissing
    };
    let result = File::new(FILE_NAME, template(target.name(), kind, opts.name))
        .with_rules(FileRules { overwrite })
        .write_to(opts.dir)?;

    Ok((opts.dir.join(FILE_NAME), result))
}
