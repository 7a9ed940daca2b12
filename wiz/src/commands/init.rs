use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use wizgen_core::WriteResult;

use crate::{
    ops::{self, init::InitOptions},
    reports::{Output, TerminalOutput},
    targets,
};

#[derive(Args)]
pub struct InitCommand {
    /// Target ecosystem
    #[arg(short, long, default_value = "solidity")]
    pub target: String,

    /// Contract kind (defaults to the target's first kind)
    #[arg(short, long)]
    pub kind: Option<String>,

    /// Contract name
    #[arg(short, long, default_value = "MyToken")]
    pub name: String,

    /// Directory to create wizard.toml in
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Replace an existing wizard.toml
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let target = targets::get(&self.target)?;

        let (path, result) = ops::init(
            target,
            InitOptions {
                dir: &self.output,
                kind: self.kind.as_deref(),
                name: &self.name,
                force: self.force,
            },
        )?;

        let mut out = TerminalOutput::new();
        match result {
            WriteResult::Written | WriteResult::Unchanged => {
                out.status(true, &format!("Created {}", path.display()));
                out.preformatted("Run 'wiz generate' to generate the contract.");
            }
            WriteResult::Skipped => out.warning(&format!(
                "{} already exists, pass --force to replace it",
                path.display()
            )),
        }
        Ok(())
    }
}
