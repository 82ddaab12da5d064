//! On-disk representation of the binding config.
//!
//! Responsibilities:
//! - Define config file errors (`ConfigFileError`).
//! - Read and parse binding files, detecting the legacy single-table format.
//!
//! Does NOT handle:
//! - Writing files (handled by the manager via atomic save).
//! - Relocating files between paths (see migration module).
//!
//! Invariants:
//! - A file with a top-level `bindings` table and neither layout table is legacy.
//! - One malformed binding string fails the whole parse; there is no partial
//!   recovery of the remaining entries.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use super::migration::migrate_legacy_bindings;
use crate::constants::{LAYOUT_TABLE_KEYS, LEGACY_BINDINGS_KEY};
use crate::types::{BindingMap, KeyboardLayout, ShortcutConfig};

/// The single-table format written by older releases.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyConfigFile {
    #[serde(default)]
    keyboard_layout: KeyboardLayout,
    bindings: BindingMap,
}

/// Result of parsing a binding file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LoadedConfig {
    pub config: ShortcutConfig,
    /// True when the file was in the legacy format and was converted.
    pub migrated: bool,
}

/// Errors that can occur when reading the binding file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Failed to read binding file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse binding file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Reads and parses the binding file from disk.
pub(crate) fn read_config_file(path: &Path) -> Result<LoadedConfig, ConfigFileError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config(&content).map_err(|e| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Parses file content in either the current or the legacy format.
pub(crate) fn parse_config(content: &str) -> Result<LoadedConfig, serde_json::Error> {
    let value: Value = serde_json::from_str(content)?;

    if is_legacy_shape(&value) {
        let legacy: LegacyConfigFile = serde_json::from_value(value)?;
        return Ok(LoadedConfig {
            config: migrate_legacy_bindings(legacy.bindings, legacy.keyboard_layout),
            migrated: true,
        });
    }

    Ok(LoadedConfig {
        config: serde_json::from_value(value)?,
        migrated: false,
    })
}

fn is_legacy_shape(value: &Value) -> bool {
    value.get(LEGACY_BINDINGS_KEY).is_some()
        && LAYOUT_TABLE_KEYS.iter().all(|key| value.get(key).is_none())
}
