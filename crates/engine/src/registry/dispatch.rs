//! Per-frame dispatch and play-mode suppression.

use std::rc::Rc;
use std::sync::mpsc::Receiver;

use shortcut_config::{Binding, KeyCode};

use super::ShortcutRegistry;
use crate::action::Action;
use crate::context::UiContext;
use crate::input::{FrameId, PlayModeEvent, latest_event};

impl ShortcutRegistry {
    /// Fire the most specific pressed binding whose best candidate is
    /// applicable in `context`. At most one handler runs per frame.
    ///
    /// Returns true if an action fired.
    ///
    /// Nothing fires when this frame was already processed, while play mode
    /// is active, or while any popup is open. The popup check runs before
    /// scope evaluation, so `Popup`-scoped actions never fire through here.
    pub fn process_shortcuts(&mut self, context: &dyn UiContext) -> bool {
        let frame = self.clock.current_frame();
        if self.last_frame == Some(frame) {
            return false;
        }
        if self.play_mode_active {
            return false;
        }
        if context.popup_open() {
            return false;
        }

        let keys = Rc::clone(&self.keys);
        self.consumed_keys.retain(|key| keys.key_held(*key));

        // Handlers may rebuild the index; keep scanning the list we started with.
        let snapshot = Rc::clone(&self.sorted);
        for entry in snapshot.iter() {
            let binding = entry.binding();
            if self.consumed_keys.contains(&binding.key) {
                continue;
            }
            if !binding.is_pressed(keys.as_ref()) {
                continue;
            }
            let Some(action) = entry.best_candidate(context) else {
                continue;
            };

            let action = Rc::clone(action);
            self.last_frame = Some(frame);
            if binding.modifier_count() > 0 {
                self.consumed_keys.insert(binding.key);
            }
            self.fire(&action, binding);
            return true;
        }

        false
    }

    fn fire(&mut self, action: &Action, binding: Binding) {
        let Some(handler) = self.handlers.get(action.id()).cloned() else {
            tracing::debug!(
                action_id = %action.id(),
                binding = %binding,
                "Shortcut matched an action with no handler"
            );
            return;
        };

        tracing::debug!(action_id = %action.id(), binding = %binding, "Shortcut fired");
        handler(self);
    }

    pub fn set_play_mode_active(&mut self, active: bool) {
        if self.play_mode_active != active {
            tracing::debug!(active, "Play mode changed");
        }
        self.play_mode_active = active;
    }

    pub fn handle_play_mode_event(&mut self, event: PlayModeEvent) {
        self.set_play_mode_active(event.is_active());
    }

    /// Apply the latest pending simulation event, if any, without blocking.
    pub fn drain_play_mode_events(&mut self, events: &Receiver<PlayModeEvent>) {
        if let Some(event) = latest_event(events) {
            self.handle_play_mode_event(event);
        }
    }

    pub fn is_play_mode_active(&self) -> bool {
        self.play_mode_active
    }

    /// Frame on which an action last fired.
    pub fn last_frame(&self) -> Option<FrameId> {
        self.last_frame
    }

    /// True while `key` is suppressed after firing a modified binding.
    pub fn is_key_consumed(&self, key: KeyCode) -> bool {
        self.consumed_keys.contains(&key)
    }
}
