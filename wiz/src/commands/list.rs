use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
    targets,
};

#[derive(Args)]
pub struct ListCommand {
    /// Only list this target
    pub target: Option<String>,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let selected = targets::select(self.target.as_deref())?;

        ops::list(&selected)?.render(&mut TerminalOutput::new());
        Ok(())
    }
}
