mod cancel;
mod environment;
mod error;
mod interaction;
mod messages;

use std::path::PathBuf;
use std::process::ExitCode;

use bumpbot_operations::operations::{BumpOperation, BumpOutcome};
use bumpbot_operations::providers::{
    FileSystemWorkspaceProvider, GitCliProvider, GithubCliProvider, NpmProvider,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::environment::PromptDefaults;
use crate::error::{CliError, Result};
use crate::interaction::TerminalInteractionProvider;

const LOG_ENV: &str = "BUMPBOT_LOG";

#[derive(Parser)]
#[command(name = "bumpbot", version)]
#[command(about = "Bump a package version and open a pull request for it", long_about = None)]
struct Cli {
    /// Repository to run in (default: current directory)
    workdir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(BumpOutcome::Bumped(_)) => {
            println!("\nBumped!");
            ExitCode::SUCCESS
        }
        Ok(BumpOutcome::Cancelled) => {
            println!("\n{}", messages::exit_excuse());
            ExitCode::FAILURE
        }
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<BumpOutcome> {
    let workdir = resolve_workdir(cli.workdir)?;

    println!("\nbumpbot {}...\n", messages::wake_up_message());

    if let Some(reason) = environment::non_interactive_reason() {
        return Err(CliError::NotATty { reason });
    }
    cancel::install_handler()?;

    let operation = BumpOperation::new(
        GitCliProvider::default(),
        GithubCliProvider::default(),
        NpmProvider::default(),
        FileSystemWorkspaceProvider::new(),
        TerminalInteractionProvider::new(PromptDefaults::from_env()),
    );
    Ok(operation.execute(&workdir)?)
}

fn resolve_workdir(workdir: Option<PathBuf>) -> Result<PathBuf> {
    match workdir {
        Some(path) => {
            println!("Using working directory: {}", path.display());
            dunce::canonicalize(&path).map_err(|source| CliError::WorkdirNotFound { path, source })
        }
        None => std::env::current_dir().map_err(CliError::CurrentDir),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn print_error(error: &CliError) {
    eprintln!("\n✖ ERROR \n{error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
