use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use wizgen_manifest::FILE_NAME;

use super::{generate_request, open_request};
use crate::{
    ops::{self, generate::GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to wizard.toml (defaults to ./wizard.toml)
    #[arg(short, long, default_value = FILE_NAME)]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Also emit the contract IR as <contract>.ir.json
    #[arg(long)]
    pub emit_ir: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let (request, target) = open_request(&self.config);
        let generated = generate_request(target, &request)?;

        let report = ops::generate(
            &request,
            &generated,
            GenerateOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
                emit_ir: self.emit_ir,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
