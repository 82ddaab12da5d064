//! Persisted binding tables for both keyboard layouts.
//!
//! Responsibilities:
//! - Hold the active layout and one override table per layout.
//! - Provide per-layout access and an additive merge for newly added defaults.
//!
//! Does NOT handle:
//! - File I/O (see `persistence`).
//! - Resolving effective bindings against action defaults (see the engine crate).
//!
//! Invariants:
//! - A missing entry means "use the action's default"; an entry holding
//!   `None` means "explicitly unbound". The two are never conflated.
//! - `BindingMap` is a `BTreeMap` for deterministic serialization.
//! - `merge_missing` never overwrites an existing entry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::keybind::Binding;
use crate::types::layout::KeyboardLayout;

/// Action id -> override (`None` = explicitly unbound).
pub type BindingMap = BTreeMap<String, Option<Binding>>;

/// User binding overrides for both keyboard layouts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShortcutConfig {
    /// Which layout's table is applied to the registry.
    pub keyboard_layout: KeyboardLayout,
    /// Overrides used while the QWERTY layout is active.
    pub qwerty_bindings: BindingMap,
    /// Overrides used while the AZERTY layout is active.
    pub azerty_bindings: BindingMap,
}

impl ShortcutConfig {
    pub fn bindings(&self, layout: KeyboardLayout) -> &BindingMap {
        match layout {
            KeyboardLayout::Qwerty => &self.qwerty_bindings,
            KeyboardLayout::Azerty => &self.azerty_bindings,
        }
    }

    pub fn bindings_mut(&mut self, layout: KeyboardLayout) -> &mut BindingMap {
        match layout {
            KeyboardLayout::Qwerty => &mut self.qwerty_bindings,
            KeyboardLayout::Azerty => &mut self.azerty_bindings,
        }
    }

    /// Overrides for the currently active layout.
    pub fn active_bindings(&self) -> &BindingMap {
        self.bindings(self.keyboard_layout)
    }

    pub fn active_bindings_mut(&mut self) -> &mut BindingMap {
        self.bindings_mut(self.keyboard_layout)
    }

    /// Record an override (`None` = explicitly unbound) for one layout.
    pub fn set_binding(&mut self, layout: KeyboardLayout, id: &str, binding: Option<Binding>) {
        self.bindings_mut(layout).insert(id.to_string(), binding);
    }

    /// Remove an override so the action falls back to its default.
    ///
    /// Returns the removed entry, if any.
    pub fn clear_binding(&mut self, layout: KeyboardLayout, id: &str) -> Option<Option<Binding>> {
        self.bindings_mut(layout).remove(id)
    }

    /// Remove every override for one layout.
    pub fn clear_layout(&mut self, layout: KeyboardLayout) {
        self.bindings_mut(layout).clear();
    }

    /// Add entries from `defaults` whose ids are not present yet.
    ///
    /// Existing entries, including explicit unbinds, are left untouched.
    /// Returns the number of entries added.
    pub fn merge_missing(&mut self, layout: KeyboardLayout, defaults: &BindingMap) -> usize {
        let target = self.bindings_mut(layout);
        let mut added = 0;
        for (id, binding) in defaults {
            if !target.contains_key(id) {
                target.insert(id.clone(), *binding);
                added += 1;
            }
        }
        added
    }

    /// True when neither layout holds any override.
    pub fn is_empty(&self) -> bool {
        self.qwerty_bindings.is_empty() && self.azerty_bindings.is_empty()
    }
}
