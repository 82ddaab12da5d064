//! Centralized constants for the shortcut config crate.
//!
//! File names and environment variables live here so the CLI, the engine,
//! and tests agree on them.

// =============================================================================
// Config File Locations
// =============================================================================

/// Application directory name used under the platform config dir.
pub const APP_DIR_NAME: &str = "shortcuts";

/// File name of the persisted binding table.
pub const CONFIG_FILE_NAME: &str = "keybindings.json";

/// Environment variable that overrides the config file path.
pub const CONFIG_PATH_ENV: &str = "SHORTCUTS_CONFIG_PATH";

// =============================================================================
// Persisted Format
// =============================================================================

/// Top-level key that marks the legacy single-table format.
pub const LEGACY_BINDINGS_KEY: &str = "bindings";

/// Top-level keys of the dual-layout format.
pub const LAYOUT_TABLE_KEYS: [&str; 2] = ["qwertyBindings", "azertyBindings"];
