use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use wizgen_manifest::FILE_NAME;

use super::{generate_request, open_request};

#[derive(Args)]
pub struct PreviewCommand {
    /// Path to wizard.toml (defaults to ./wizard.toml)
    #[arg(short, long, default_value = FILE_NAME)]
    pub config: PathBuf,
}

impl PreviewCommand {
    /// Print the contract source alone, suitable for piping.
    pub fn run(&self) -> Result<()> {
        let (request, target) = open_request(&self.config);
        let generated = generate_request(target, &request)?;
        print!("{}", generated.source());
        Ok(())
    }
}
