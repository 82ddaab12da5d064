//! Regression tests for corrupt binding file handling.
//!
//! A file that fails to parse, including one with a single malformed binding
//! string, must be backed up and replaced by defaults without blocking startup.

use shortcut_config::{ConfigManager, KeyboardLayout};

fn backup_files(dir: &std::path::Path) -> Vec<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|name| name.starts_with("keybindings.corrupt."))
        .collect()
}

/// Successful backup renames the original, so the original path is gone.
#[test]
fn test_corrupt_file_backup_removes_original() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("keybindings.json");
    std::fs::write(&config_path, b"{ bad }").unwrap();

    let manager = ConfigManager::new_with_path(config_path.clone());

    assert!(manager.config().is_empty());
    assert!(!config_path.exists());
    assert_eq!(backup_files(temp_dir.path()).len(), 1);
}

/// One unparseable binding aborts the whole load: the valid entries next to
/// it are not recovered.
#[test]
fn test_single_bad_binding_discards_every_entry() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("keybindings.json");
    std::fs::write(
        &config_path,
        r#"{
            "keyboardLayout": "AZERTY",
            "qwertyBindings": { "editor.file.save": "Ctrl+S" },
            "azertyBindings": { "editor.edit.undo": "Ctrl+Hyper" }
        }"#,
    )
    .unwrap();

    let manager = ConfigManager::new_with_path(config_path);

    assert!(manager.config().is_empty());
    assert_eq!(manager.config().keyboard_layout, KeyboardLayout::Qwerty);
    assert_eq!(backup_files(temp_dir.path()).len(), 1);
}

/// Backup content is byte-for-byte the corrupt file.
#[test]
fn test_backup_preserves_content() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("keybindings.json");
    std::fs::write(&config_path, b"{ \"qwertyBindings\": 42 }").unwrap();

    let _manager = ConfigManager::new_with_path(config_path);

    let backups = backup_files(temp_dir.path());
    assert_eq!(backups.len(), 1);
    let content = std::fs::read_to_string(temp_dir.path().join(&backups[0])).unwrap();
    assert_eq!(content, "{ \"qwertyBindings\": 42 }");
}

/// Saving after a corrupt load writes a fresh, valid file.
#[test]
fn test_save_after_corrupt_load_writes_valid_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("keybindings.json");
    std::fs::write(&config_path, b"not json at all").unwrap();

    let mut manager = ConfigManager::new_with_path(config_path.clone());
    manager.save().unwrap();

    let reloaded = ConfigManager::new_with_path(config_path);
    assert!(reloaded.config().is_empty());
    assert!(!reloaded.was_migrated());
}
