//! Shared helpers for architecture tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Workspace root, two levels above this crate's manifest.
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .expect("architecture-tests lives under crates/")
        .to_path_buf()
}

/// Every `.rs` file under `dir`, skipping build output and this crate.
pub fn rust_files(dir: &Path) -> Vec<PathBuf> {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_string_lossy();
            name != "target" && name != "architecture-tests"
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| e.into_path())
        .collect()
}

/// Entries of a `[dependencies]`-style table in a Cargo manifest.
///
/// Only the keys are returned; values are ignored.
pub fn dependency_names(manifest: &Path, table: &str) -> Vec<String> {
    let content = fs::read_to_string(manifest)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", manifest.display(), e));
    let header = format!("[{}]", table);

    let mut names = Vec::new();
    let mut in_table = false;
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('[') {
            in_table = trimmed == header;
            continue;
        }
        if !in_table || trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some((name, _)) = trimmed.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}
