//! Shared test utilities for shortcuts integration tests.
//!
//! Invariants:
//! - Every command writes to its own temporary binding file, never the user's.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A temporary directory holding one binding file path.
pub struct TempConfig {
    _dir: TempDir,
    pub path: PathBuf,
}

impl TempConfig {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("keybindings.json");
        Self { _dir: dir, path }
    }

    pub fn with_contents(contents: &str) -> Self {
        let config = Self::new();
        std::fs::write(&config.path, contents).expect("Failed to write binding file");
        config
    }

    pub fn json(&self) -> serde_json::Value {
        read_json(&self.path)
    }
}

pub fn read_json(path: &Path) -> serde_json::Value {
    let raw = std::fs::read_to_string(path).expect("binding file should exist");
    serde_json::from_str(&raw).expect("binding file should be JSON")
}

/// Returns a hermetic `shortcuts` command bound to `config`.
pub fn shortcuts_cmd(config: &TempConfig) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("shortcuts");
    cmd.env("SHORTCUTS_CONFIG_PATH", &config.path)
        .env_remove("RUST_LOG");
    cmd
}
