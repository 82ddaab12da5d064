//! Path helpers for the binding config file.
//!
//! Responsibilities:
//! - Determine the standard and legacy binding file paths.
//! - Use the `directories` crate for platform-appropriate locations.
//!
//! Does NOT handle:
//! - File I/O operations.
//! - Migration logic.

use std::path::PathBuf;

use anyhow::Context;

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};

/// Returns the default path to the binding config file.
///
/// - Linux: `~/.config/shortcuts/keybindings.json`
/// - macOS: `~/Library/Application Support/shortcuts/keybindings.json`
/// - Windows: `%AppData%\shortcuts\config\keybindings.json`
pub(crate) fn default_config_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_DIR_NAME)
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Returns the path older releases wrote to.
///
/// Those releases nested the application directory twice, producing
/// `.../shortcuts/shortcuts/keybindings.json`.
pub(crate) fn legacy_config_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_DIR_NAME)
        .context("Failed to determine legacy project directories")?;

    Ok(proj_dirs
        .config_dir()
        .join(APP_DIR_NAME)
        .join(CONFIG_FILE_NAME))
}
