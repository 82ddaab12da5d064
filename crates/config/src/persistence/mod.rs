//! Persistence of user binding overrides.
//!
//! Responsibilities:
//! - Manage the standard and legacy binding file paths.
//! - Relocate files from the legacy path and convert the legacy format.
//! - Read and atomically write the dual-layout binding file.
//! - Back up corrupt files before they are replaced.
//!
//! Does NOT handle:
//! - Applying overrides to the dispatch registry (see the engine crate).
//! - Binding string parsing (see `keybind`).
//!
//! Invariants:
//! - The standard path is preferred over the legacy path.
//! - A missing or unreadable file never blocks startup; defaults are used.
//! - Corrupt files are backed up before being overwritten.

use std::path::{Path, PathBuf};

mod manager;
mod migration;
mod path;
mod state;

pub use manager::ConfigManager;
pub use state::ConfigFileError;

/// Creates a backup of a corrupt binding file before it is overwritten.
///
/// The file is renamed with a `.corrupt.{timestamp}` extension so its
/// contents stay recoverable while the application starts with defaults.
pub(crate) fn create_corrupt_backup(path: &Path) -> Result<PathBuf, std::io::Error> {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let backup_path = path.with_extension(format!("corrupt.{}", timestamp));

    std::fs::rename(path, &backup_path)?;

    Ok(backup_path)
}
