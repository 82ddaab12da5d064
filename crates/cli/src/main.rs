//! shortcuts - inspect and rebind editor keyboard shortcuts from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Load the binding file, apply the requested change, and save it.
//! - Report failures with structured exit codes.
//!
//! Does NOT handle:
//! - Dispatching shortcuts (there is no frame loop here; see `shortcut-engine`).
//!
//! Invariants:
//! - Logs go to stderr so stdout stays machine-readable.

mod args;
mod catalog;
mod commands;
mod dispatch;
mod error;
mod formatters;
mod headless;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
