use clap::Args;
use eyre::{Result, bail};

use crate::{
    ops,
    reports::{Report, TerminalOutput},
    targets,
};

#[derive(Args)]
pub struct CheckCommand {
    /// Only check this target
    pub target: Option<String>,

    /// Only check this contract kind
    #[arg(short, long)]
    pub kind: Option<String>,

    /// Failing records to print per kind
    #[arg(long, default_value_t = 5)]
    pub max_failures: usize,
}

impl CheckCommand {
    /// Run the oracle; exits non-zero if any record fails.
    pub fn run(&self) -> Result<()> {
        let selected = targets::select(self.target.as_deref())?;

        let report = ops::check(&selected, self.kind.as_deref(), self.max_failures)?;
        if report.kinds.is_empty() {
            bail!("No contract kind matched");
        }
        report.render(&mut TerminalOutput::new());

        if !report.passed() {
            std::process::exit(1);
        }
        Ok(())
    }
}
