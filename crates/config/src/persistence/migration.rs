//! Migration of older binding files.
//!
//! Responsibilities:
//! - Move a binding file from the legacy location to the standard one.
//! - Convert the legacy single-table format into the dual-layout format.
//!
//! Does NOT handle:
//! - Path determination (uses path module).
//! - Detecting which format a file is in (see state module).
//!
//! Invariants:
//! - Relocation is atomic (uses rename) and never overwrites an existing file.
//! - Relocation never panics and never returns errors; it logs instead.
//! - Legacy entries land only in the active layout's table.

use std::path::Path;

use crate::types::{BindingMap, KeyboardLayout, ShortcutConfig};

/// Move the binding file from `legacy_path` to `new_path` if only the legacy one exists.
///
/// Returns true when a file was moved. Failures are logged and reported as
/// `false`: relocation must not break startup.
pub(crate) fn relocate_legacy_config(legacy_path: &Path, new_path: &Path) -> bool {
    if new_path.exists() {
        return false;
    }

    let legacy_meta = match std::fs::metadata(legacy_path) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return false,
        Err(e) => {
            tracing::warn!(
                legacy_path = %legacy_path.display(),
                error = %e,
                "Could not stat legacy binding file; skipping relocation"
            );
            return false;
        }
    };

    if !legacy_meta.is_file() {
        tracing::warn!(
            legacy_path = %legacy_path.display(),
            "Legacy binding path exists but is not a file; skipping relocation"
        );
        return false;
    }

    if let Some(parent) = new_path.parent()
        && let Err(e) = std::fs::create_dir_all(parent)
    {
        tracing::warn!(
            new_parent = %parent.display(),
            error = %e,
            "Could not create config directory for relocated binding file"
        );
        return false;
    }

    match std::fs::rename(legacy_path, new_path) {
        Ok(()) => {
            tracing::warn!(
                legacy_path = %legacy_path.display(),
                new_path = %new_path.display(),
                "Relocated binding file from legacy path"
            );
            true
        }
        Err(e) => {
            tracing::warn!(
                legacy_path = %legacy_path.display(),
                new_path = %new_path.display(),
                error = %e,
                "Could not relocate legacy binding file"
            );
            false
        }
    }
}

/// Build a dual-layout config from a legacy single-table file.
///
/// Every legacy entry goes into `active_layout`'s table; the other table
/// stays empty.
pub(crate) fn migrate_legacy_bindings(
    bindings: BindingMap,
    active_layout: KeyboardLayout,
) -> ShortcutConfig {
    let mut config = ShortcutConfig {
        keyboard_layout: active_layout,
        ..ShortcutConfig::default()
    };
    let migrated = bindings.len();
    config.bindings_mut(active_layout).extend(bindings);

    tracing::info!(
        layout = %active_layout,
        entries = migrated,
        "Migrated legacy binding table into active layout"
    );

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keybind::{Binding, KeyCode};
    use serial_test::serial;
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicU64, Ordering},
    };
    use tempfile::TempDir;

    /// Minimal in-test tracing subscriber that records event messages.
    #[derive(Clone, Default)]
    struct CapturingSubscriber {
        events: Arc<Mutex<Vec<String>>>,
        next_id: Arc<AtomicU64>,
    }

    impl CapturingSubscriber {
        fn take_messages(&self) -> Vec<String> {
            std::mem::take(&mut *self.events.lock().expect("lock poisoned"))
        }
    }

    struct MessageVisitor {
        message: Option<String>,
    }

    impl tracing::field::Visit for MessageVisitor {
        fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
            if field.name() == "message" {
                self.message = Some(value.to_string());
            }
        }

        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            if field.name() == "message" {
                self.message = Some(format!("{value:?}"));
            }
        }
    }

    impl tracing::Subscriber for CapturingSubscriber {
        fn enabled(&self, _metadata: &tracing::Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _attrs: &tracing::span::Attributes<'_>) -> tracing::span::Id {
            tracing::span::Id::from_u64(self.next_id.fetch_add(1, Ordering::Relaxed))
        }

        fn record(&self, _span: &tracing::span::Id, _values: &tracing::span::Record<'_>) {}

        fn record_follows_from(&self, _span: &tracing::span::Id, _follows: &tracing::span::Id) {}

        fn event(&self, event: &tracing::Event<'_>) {
            let mut visitor = MessageVisitor { message: None };
            event.record(&mut visitor);
            if let Some(msg) = visitor.message {
                self.events.lock().expect("lock poisoned").push(msg);
            }
        }

        fn enter(&self, _span: &tracing::span::Id) {}

        fn exit(&self, _span: &tracing::span::Id) {}

        fn register_callsite(
            &self,
            _metadata: &'static tracing::Metadata<'static>,
        ) -> tracing::subscriber::Interest {
            tracing::subscriber::Interest::always()
        }
    }

    fn capture_messages<F: FnOnce()>(f: F) -> Vec<String> {
        let _guard = crate::test_util::global_test_lock().lock().unwrap();

        let subscriber = CapturingSubscriber {
            events: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        };

        let dispatch = tracing::Dispatch::new(subscriber.clone());
        tracing::dispatcher::with_default(&dispatch, f);
        subscriber.take_messages()
    }

    #[test]
    #[serial]
    fn test_relocation_moves_file_and_preserves_content() {
        let temp_dir = TempDir::new().unwrap();
        let legacy_path = temp_dir
            .path()
            .join("shortcuts")
            .join("shortcuts")
            .join("keybindings.json");
        let new_path = temp_dir.path().join("shortcuts").join("keybindings.json");

        std::fs::create_dir_all(legacy_path.parent().unwrap()).unwrap();
        let content = r#"{ "bindings": { "editor.file.save": "Ctrl+S" } }"#;
        std::fs::write(&legacy_path, content).unwrap();

        let messages = capture_messages(|| {
            assert!(relocate_legacy_config(&legacy_path, &new_path));
        });

        assert!(!legacy_path.exists());
        assert_eq!(std::fs::read_to_string(&new_path).unwrap(), content);
        assert!(
            messages
                .iter()
                .any(|m| m.contains("Relocated binding file from legacy path")),
            "expected relocation to be logged; got: {messages:?}"
        );
    }

    #[test]
    #[serial]
    fn test_relocation_never_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let legacy_path = temp_dir.path().join("legacy.json");
        let new_path = temp_dir.path().join("keybindings.json");
        std::fs::write(&legacy_path, "legacy").unwrap();
        std::fs::write(&new_path, "current").unwrap();

        assert!(!relocate_legacy_config(&legacy_path, &new_path));
        assert_eq!(std::fs::read_to_string(&new_path).unwrap(), "current");
        assert!(legacy_path.exists());
    }

    #[test]
    #[serial]
    fn test_relocation_failure_logged_but_not_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let legacy_path = temp_dir.path().join("legacy").join("keybindings.json");
        std::fs::create_dir_all(legacy_path.parent().unwrap()).unwrap();
        std::fs::write(&legacy_path, "{}").unwrap();

        // A file where the target directory should be makes create_dir_all fail.
        let new_parent = temp_dir.path().join("newparent");
        std::fs::write(&new_parent, "not a directory").unwrap();
        let new_path = new_parent.join("keybindings.json");

        let messages = capture_messages(|| {
            assert!(!relocate_legacy_config(&legacy_path, &new_path));
        });

        assert!(legacy_path.exists(), "legacy file should remain on failure");
        assert!(
            messages
                .iter()
                .any(|m| m.contains("Could not create config directory")),
            "expected a warning on relocation failure; got: {messages:?}"
        );
    }

    #[test]
    fn test_legacy_bindings_land_in_active_layout_only() {
        let mut legacy = BindingMap::new();
        legacy.insert(
            "editor.file.save".to_string(),
            Some(Binding::plain(KeyCode::Char('S')).with_ctrl()),
        );
        legacy.insert("editor.debug.sayHi".to_string(), None);

        let config = migrate_legacy_bindings(legacy.clone(), KeyboardLayout::Azerty);

        assert_eq!(config.keyboard_layout, KeyboardLayout::Azerty);
        assert_eq!(config.azerty_bindings, legacy);
        assert!(config.qwerty_bindings.is_empty());
    }
}
