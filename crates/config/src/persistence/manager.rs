//! Loading and saving the binding file.
//!
//! Responsibilities:
//! - Resolve the config path (env override, standard path, legacy relocation).
//! - Load the file with graceful fallback to an empty config.
//! - Save atomically (temp file + rename).
//!
//! Does NOT handle:
//! - File format details (see state module).
//! - Deciding when to save (callers such as the registry do that).
//!
//! Invariants:
//! - Loading never fails: missing, unreadable, or malformed files yield defaults.
//! - Writes are atomic and always use the dual-layout format.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::create_corrupt_backup;
use super::migration::relocate_legacy_config;
use super::path::{default_config_path, legacy_config_path};
use super::state::{ConfigFileError, LoadedConfig, read_config_file};
use crate::constants::CONFIG_PATH_ENV;
use crate::env_var_or_none;
use crate::types::ShortcutConfig;

/// Manages loading and saving the user's binding overrides.
#[derive(Debug)]
pub struct ConfigManager {
    /// Path to the binding file.
    config_path: PathBuf,
    /// In-memory config; authoritative for the running session.
    config: ShortcutConfig,
    /// Set when the file on disk is still in the legacy format.
    migrated: bool,
}

impl ConfigManager {
    /// Creates a `ConfigManager` using the platform-standard config directory.
    ///
    /// If `SHORTCUTS_CONFIG_PATH` is set (and not blank) it is used instead.
    /// Otherwise a file left at the legacy location is moved to the standard
    /// one first, best effort.
    ///
    /// # Errors
    /// Returns an error if the platform config directory cannot be determined.
    pub fn new() -> Result<Self> {
        let config_path = if let Some(path_str) = env_var_or_none(CONFIG_PATH_ENV) {
            PathBuf::from(path_str)
        } else {
            let default_path = default_config_path()?;
            if let Ok(legacy_path) = legacy_config_path() {
                relocate_legacy_config(&legacy_path, &default_path);
            }
            default_path
        };

        Ok(Self::new_with_path(config_path))
    }

    /// Creates a `ConfigManager` for a specific file.
    ///
    /// A missing file yields an empty config. A file that cannot be read or
    /// parsed is backed up with a `.corrupt.{timestamp}` extension and an
    /// empty config is used, so every action keeps its default binding.
    pub fn new_with_path(config_path: PathBuf) -> Self {
        let LoadedConfig { config, migrated } = load_or_default(&config_path);
        Self {
            config_path,
            config,
            migrated,
        }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    pub fn config(&self) -> &ShortcutConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ShortcutConfig {
        &mut self.config
    }

    /// True when the file was read in the legacy format and has not been
    /// rewritten yet.
    pub fn was_migrated(&self) -> bool {
        self.migrated
    }

    /// Discard in-memory changes and read the file again.
    pub fn reload(&mut self) {
        let LoadedConfig { config, migrated } = load_or_default(&self.config_path);
        self.config = config;
        self.migrated = migrated;
    }

    /// Write the config to disk atomically in the dual-layout format.
    pub fn save(&mut self) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let temp_path = self.config_path.with_extension("tmp");
        let content =
            serde_json::to_string_pretty(&self.config).context("Failed to serialize bindings")?;
        std::fs::write(&temp_path, content).context("Failed to write temporary binding file")?;

        std::fs::rename(&temp_path, &self.config_path)
            .context("Failed to rename temporary binding file")?;

        self.migrated = false;

        tracing::debug!(
            path = %self.config_path.display(),
            layout = %self.config.keyboard_layout,
            "Binding config saved atomically"
        );

        Ok(())
    }
}

fn load_or_default(path: &Path) -> LoadedConfig {
    let fallback = || LoadedConfig {
        config: ShortcutConfig::default(),
        migrated: false,
    };

    if !path.exists() {
        tracing::debug!(path = %path.display(), "No binding file found, using defaults");
        return fallback();
    }

    match read_config_file(path) {
        Ok(loaded) => {
            tracing::info!(
                path = %path.display(),
                layout = %loaded.config.keyboard_layout,
                overrides = loaded.config.active_bindings().len(),
                migrated = loaded.migrated,
                "Loaded binding overrides"
            );
            loaded
        }
        Err(e @ ConfigFileError::Read { .. }) => {
            tracing::error!(error = %e, "Failed to read binding file, using defaults");
            fallback()
        }
        Err(e @ ConfigFileError::Parse { .. }) => {
            match create_corrupt_backup(path) {
                Ok(backup_path) => tracing::error!(
                    error = %e,
                    backup = %backup_path.display(),
                    "Binding file is corrupt; backed it up and using defaults"
                ),
                Err(backup_err) => tracing::error!(
                    error = %e,
                    backup_error = %backup_err,
                    "Binding file is corrupt and could not be backed up; using defaults"
                ),
            }
            fallback()
        }
    }
}
