//! Derived binding index and specificity-sorted binding list.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::rc::Rc;

use shortcut_config::Binding;

use super::{ShortcutRegistry, layout_default};
use crate::action::Action;
use crate::context::UiContext;

/// One binding and every action currently bound to it, in registration order.
#[derive(Debug, Clone)]
pub struct BindingEntry {
    binding: Binding,
    candidates: Vec<Rc<Action>>,
}

impl BindingEntry {
    pub fn binding(&self) -> Binding {
        self.binding
    }

    pub fn candidates(&self) -> impl Iterator<Item = &Action> {
        self.candidates.iter().map(Rc::as_ref)
    }

    /// Highest-priority candidate applicable in `context`; the earliest
    /// registered wins a tie.
    pub(super) fn best_candidate(&self, context: &dyn UiContext) -> Option<&Rc<Action>> {
        self.candidates
            .iter()
            .filter(|action| action.is_applicable(context))
            .min_by_key(|action| action.scope().kind().rank())
    }
}

impl ShortcutRegistry {
    /// Recompute the binding index and sorted list from actions and overrides.
    ///
    /// Pure: two calls with no change in between produce the same order.
    /// A dispatch already scanning the previous list keeps its own snapshot.
    pub fn rebuild_index(&mut self) {
        let mut index: HashMap<Binding, Vec<Rc<Action>>> = HashMap::new();
        let mut first_seen: Vec<Binding> = Vec::new();

        for action in &self.actions {
            let Some(binding) = self.effective_binding(action) else {
                continue;
            };
            let candidates = index.entry(binding).or_default();
            if candidates.is_empty() {
                first_seen.push(binding);
            }
            candidates.push(Rc::clone(action));
        }

        let mut sorted: Vec<BindingEntry> = first_seen
            .into_iter()
            .filter_map(|binding| {
                index.get(&binding).map(|candidates| BindingEntry {
                    binding,
                    candidates: candidates.clone(),
                })
            })
            .collect();
        // Stable: equal specificity keeps first-appearance order.
        sorted.sort_by_key(|entry| Reverse(entry.binding.modifier_count()));

        tracing::debug!(
            actions = self.actions.len(),
            bindings = sorted.len(),
            "Rebuilt shortcut index"
        );

        self.index = index;
        self.sorted = Rc::from(sorted);
    }

    /// Bindings ordered by descending modifier count.
    pub fn sorted_bindings(&self) -> &[BindingEntry] {
        &self.sorted
    }

    /// Actions currently bound to `binding`, in registration order.
    pub fn actions_for(&self, binding: &Binding) -> impl Iterator<Item = &Action> {
        self.index
            .get(binding)
            .into_iter()
            .flatten()
            .map(Rc::as_ref)
    }

    pub(super) fn effective_binding(&self, action: &Action) -> Option<Binding> {
        match self.overrides.get(action.id()) {
            Some(overridden) => *overridden,
            None => self.default_binding(action),
        }
    }

    /// Default of `action` on the active layout; QWERTY when no config is
    /// attached.
    pub(super) fn default_binding(&self, action: &Action) -> Option<Binding> {
        layout_default(self.keyboard_layout().unwrap_or_default(), action)
    }
}
