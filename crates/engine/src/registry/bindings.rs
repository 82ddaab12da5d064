//! Binding overrides, conflict detection, and config write-back.

use shortcut_config::{Binding, BindingMap, ConfigManager, KeyboardLayout};

use super::ShortcutRegistry;
use crate::action::Action;
use crate::scope::scopes_conflict;

/// Default binding of `action` on `layout`: the declared default, remapped
/// from QWERTY key positions.
///
/// The standard generator for [`ShortcutRegistry::generate_complete_config`].
pub fn layout_default(layout: KeyboardLayout, action: &Action) -> Option<Binding> {
    action
        .default_binding()
        .map(|binding| layout.remap_from_qwerty(binding))
}

impl ShortcutRegistry {
    /// Effective binding: the override if one exists, else the default
    /// remapped to the active layout.
    ///
    /// `None` for unknown ids and for actions that are unbound.
    pub fn get_binding(&self, id: &str) -> Option<Binding> {
        self.action(id)
            .and_then(|action| self.effective_binding(action))
    }

    /// True when an override exists and differs from the layout's default.
    pub fn has_custom_binding(&self, id: &str) -> bool {
        match (self.action(id), self.overrides.get(id)) {
            (Some(action), Some(overridden)) => *overridden != self.default_binding(action),
            _ => false,
        }
    }

    /// Override the binding of `id`; `None` unbinds it.
    ///
    /// Conflicting bindings are accepted. Returns false for an unknown id
    /// and for a key that could not be read back from the binding file.
    pub fn set_binding(&mut self, id: &str, binding: Option<Binding>) -> bool {
        if self.action(id).is_none() {
            tracing::warn!(action_id = %id, "Cannot set binding: unknown action");
            return false;
        }
        let binding = match binding.map(Binding::validated).transpose() {
            Ok(binding) => binding,
            Err(e) => {
                tracing::warn!(action_id = %id, error = %e, "Cannot set binding");
                return false;
            }
        };

        self.overrides.insert(id.to_string(), binding);
        self.rebuild_index();
        self.persist();

        tracing::debug!(
            action_id = %id,
            binding = %display_binding(binding),
            "Shortcut binding changed"
        );
        true
    }

    /// Drop the override for `id` so the layout's default applies again.
    /// Returns true if one was removed.
    pub fn reset_to_default(&mut self, id: &str) -> bool {
        if self.action(id).is_none() {
            tracing::warn!(action_id = %id, "Cannot reset binding: unknown action");
            return false;
        }
        if self.overrides.remove(id).is_none() {
            return false;
        }

        self.rebuild_index();
        self.persist();
        true
    }

    pub fn reset_all_to_defaults(&mut self) {
        self.overrides.clear();
        self.rebuild_index();
        self.persist();
        tracing::info!("All shortcut bindings reset to defaults");
    }

    /// Other actions bound to `binding` whose scope would collide with `id`'s.
    pub fn find_conflicts(&self, id: &str, binding: &Binding) -> Vec<&Action> {
        let Some(action) = self.action(id) else {
            return Vec::new();
        };

        self.actions_for(binding)
            .filter(|other| other.id() != id)
            .filter(|other| scopes_conflict(action.scope(), other.scope()))
            .collect()
    }

    /// Load the active layout's overrides from `manager` and write later
    /// changes back to it.
    ///
    /// Replaces any previously attached config.
    pub fn attach_config(&mut self, manager: ConfigManager) {
        let layout = manager.config().keyboard_layout;
        let loaded = manager.config().active_bindings().len();
        self.overrides.extend(
            manager
                .config()
                .active_bindings()
                .iter()
                .map(|(id, binding)| (id.clone(), *binding)),
        );
        self.config = Some(manager);
        self.rebuild_index();

        tracing::info!(layout = %layout, overrides = loaded, "Attached shortcut config");
    }

    pub fn detach_config(&mut self) -> Option<ConfigManager> {
        self.config.take()
    }

    pub fn config(&self) -> Option<&ConfigManager> {
        self.config.as_ref()
    }

    pub fn keyboard_layout(&self) -> Option<KeyboardLayout> {
        self.config
            .as_ref()
            .map(|manager| manager.config().keyboard_layout)
    }

    /// Switch the active layout and adopt that layout's overrides.
    ///
    /// Returns false when no config is attached.
    pub fn set_keyboard_layout(&mut self, layout: KeyboardLayout) -> bool {
        let Some(manager) = self.config.as_mut() else {
            tracing::warn!(layout = %layout, "Cannot switch layout: no config attached");
            return false;
        };

        let config = manager.config_mut();
        config.keyboard_layout = layout;
        self.overrides = config
            .active_bindings()
            .iter()
            .map(|(id, binding)| (id.clone(), *binding))
            .collect();

        self.rebuild_index();
        self.persist();
        tracing::info!(layout = %layout, "Keyboard layout switched");
        true
    }

    /// Add `generator`'s default for every action to both layout tables of
    /// the attached config, never replacing an existing entry, then save.
    ///
    /// Returns the number of entries added.
    pub fn generate_complete_config<F>(&mut self, generator: F) -> usize
    where
        F: Fn(KeyboardLayout, &Action) -> Option<Binding>,
    {
        let Some(manager) = self.config.as_mut() else {
            tracing::warn!("Cannot generate config: no config attached");
            return 0;
        };

        let mut added = 0;
        for layout in KeyboardLayout::ALL {
            let defaults: BindingMap = self
                .actions
                .iter()
                .filter_map(|action| {
                    generator(layout, action.as_ref())
                        .map(|binding| (action.id().to_string(), Some(binding)))
                })
                .collect();
            added += manager.config_mut().merge_missing(layout, &defaults);
        }

        for (id, binding) in manager.config().active_bindings() {
            self.overrides.entry(id.clone()).or_insert(*binding);
        }

        self.rebuild_index();
        self.persist();
        tracing::info!(added, "Generated complete shortcut config");
        added
    }

    /// Write overrides for registered actions into the active layout's table
    /// and save. Entries for ids not registered here are left alone.
    fn persist(&mut self) {
        let Some(manager) = self.config.as_mut() else {
            return;
        };

        let table = manager.config_mut().active_bindings_mut();
        for action in &self.actions {
            match self.overrides.get(action.id()) {
                Some(binding) => {
                    table.insert(action.id().to_string(), *binding);
                }
                None => {
                    table.remove(action.id());
                }
            }
        }

        if let Err(e) = manager.save() {
            tracing::error!(
                error = %e,
                path = %manager.path().display(),
                "Failed to save shortcut config; keeping in-memory bindings"
            );
        }
    }
}

fn display_binding(binding: Option<Binding>) -> String {
    binding.map_or_else(|| "unbound".to_string(), |b| b.display_string())
}
