//! Command dispatch logic.
//!
//! Responsibilities:
//! - Open the binding file named by the CLI (or the default one).
//! - Route parsed CLI arguments to command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).

use std::path::PathBuf;

use anyhow::{Context, Result};
use shortcut_config::ConfigManager;

use crate::args::{Cli, Commands};
use crate::commands;

pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let manager = open_config(cli.explicit_config_path())?;
    tracing::debug!(path = %manager.path().display(), "Using binding file");

    match cli.command {
        Commands::List { layout, output } => {
            commands::list::run(manager, layout.as_deref(), &output)?;
        }
        Commands::Set { id, binding, force } => {
            commands::bindings::run_set(manager, &id, &binding, force)?;
        }
        Commands::Unbind { id } => {
            commands::bindings::run_unbind(manager, &id)?;
        }
        Commands::Reset { id } => {
            commands::bindings::run_reset(manager, &id)?;
        }
        Commands::ResetAll => {
            commands::bindings::run_reset_all(manager)?;
        }
        Commands::Conflicts {
            id,
            binding,
            output,
        } => {
            commands::bindings::run_conflicts(manager, &id, &binding, &output)?;
        }
        Commands::Layout { layout } => {
            commands::layout::run(manager, layout.as_deref())?;
        }
        Commands::Generate => {
            commands::layout::run_generate(manager)?;
        }
    }

    Ok(())
}

fn open_config(path: Option<PathBuf>) -> Result<ConfigManager> {
    match path {
        Some(path) => Ok(ConfigManager::new_with_path(path)),
        None => ConfigManager::new().context("Failed to locate the binding file"),
    }
}
