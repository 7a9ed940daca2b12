use clap::Args;
use eyre::{Context, Result};

use crate::targets;

#[derive(Args)]
pub struct EnumerateCommand {
    /// Target ecosystem (e.g., solidity)
    pub target: String,

    /// Contract kind (e.g., ERC20)
    pub kind: String,

    /// Only print the number of records
    #[arg(long)]
    pub count: bool,

    /// Stop after this many records
    #[arg(short, long)]
    pub limit: Option<usize>,
}

impl EnumerateCommand {
    pub fn run(&self) -> Result<()> {
        let target = targets::get(&self.target)?;
        let blueprint = target
            .blueprint(&self.kind)
            .wrap_err("Failed to enumerate options")?;

        if self.count {
            println!("{}", blueprint.count());
            return Ok(());
        }

        let limit = self.limit.unwrap_or(usize::MAX);
        for record in blueprint.alternatives().take(limit) {
            println!("{record}");
        }
        Ok(())
    }
}
