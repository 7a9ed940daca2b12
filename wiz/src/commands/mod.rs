mod check;
mod completions;
mod enumerate;
mod generate;
mod init;
mod list;
mod preview;

use std::path::Path;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use enumerate::EnumerateCommand;
use eyre::{Context, Result};
use generate::GenerateCommand;
use init::InitCommand;
use list::ListCommand;
use preview::PreviewCommand;
use wizgen_codegen::{Generated, Target};
use wizgen_manifest::Request;

use crate::targets;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for wizgen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => exit_with(e),
        }
    }
}

fn exit_with(err: Box<wizgen_manifest::Error>) -> ! {
    eprintln!("{:?}", miette::Report::new(*err));
    std::process::exit(1);
}

/// Read a wizard.toml and resolve its target.
pub(crate) fn open_request(config: &Path) -> (Request, &'static dyn Target) {
    let request = Request::from_file(config).unwrap_or_exit();
    let Some(target) = targets::find(request.target()) else {
        exit_with(request.unknown_target(&targets::names()));
    };
    request.check_kind(target.kinds()).unwrap_or_exit();
    (request, target)
}

/// Generate the contract a request describes.
///
/// Options the target rejects are reported against the request file.
pub(crate) fn generate_request(target: &dyn Target, request: &Request) -> Result<Generated> {
    let record = request.record().unwrap_or_exit();
    match target.generate_value(record) {
        Err(wizgen_codegen::Error::InvalidOptions { source, .. }) => {
            exit_with(request.invalid_options(source))
        }
        result => result.wrap_err("Failed to generate contract"),
    }
}

#[derive(Parser)]
#[command(name = "wiz")]
#[command(version)]
#[command(about = "Generate smart contracts from wizard.toml requests")]
pub(crate) struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Preview(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Enumerate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter wizard.toml
    Init(InitCommand),

    /// Generate contract sources from wizard.toml
    Generate(GenerateCommand),

    /// Print the generated contract without writing files
    Preview(PreviewCommand),

    /// List targets, contract kinds and their options
    List(ListCommand),

    /// Print every option record of a contract kind as JSON lines
    Enumerate(EnumerateCommand),

    /// Run the regression oracle over every option record
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
