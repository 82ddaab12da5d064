//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Resolve the binding file path from flags and environment.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shortcut_config::constants::CONFIG_PATH_ENV;

#[derive(Parser)]
#[command(name = "shortcuts")]
#[command(about = "Inspect and rebind editor keyboard shortcuts", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  shortcuts list\n  shortcuts list --layout azerty --output json\n  shortcuts set editor.file.save Ctrl+Shift+S\n  shortcuts conflicts editor.edit.undo Ctrl+S\n  shortcuts layout azerty\n  shortcuts generate\n"
)]
pub struct Cli {
    /// Path to the binding file (overrides the default location).
    ///
    /// Can also be set via SHORTCUTS_CONFIG_PATH environment variable.
    #[arg(long, global = true, env = CONFIG_PATH_ENV, value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The explicit binding file path, ignoring blank values.
    pub fn explicit_config_path(&self) -> Option<PathBuf> {
        self.config_path
            .as_ref()
            .filter(|path| !path.to_string_lossy().trim().is_empty())
            .cloned()
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every action with its effective binding
    List {
        /// Show bindings for this layout instead of the active one (qwerty, azerty)
        #[arg(short, long)]
        layout: Option<String>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        output: String,
    },

    /// Bind an action to a key combination
    Set {
        /// Action id (e.g., editor.file.save)
        id: String,

        /// Key combination (e.g., Ctrl+Shift+S)
        binding: String,

        /// Apply even if other actions already use this binding
        #[arg(short, long)]
        force: bool,
    },

    /// Remove an action's binding so no key triggers it
    Unbind {
        /// Action id
        id: String,
    },

    /// Restore an action's default binding
    Reset {
        /// Action id
        id: String,
    },

    /// Restore every action's default binding on the active layout
    ResetAll,

    /// Show which actions would conflict with a binding
    Conflicts {
        /// Action id that would receive the binding
        id: String,

        /// Key combination to check
        binding: String,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        output: String,
    },

    /// Show or switch the active keyboard layout
    Layout {
        /// Layout to switch to (qwerty, azerty); omit to show the current one
        layout: Option<String>,
    },

    /// Write every default binding into the file without touching customizations
    Generate,
}
