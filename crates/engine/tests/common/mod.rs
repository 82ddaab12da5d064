//! Shared harness for registry integration tests.
#![allow(dead_code)]

use std::rc::Rc;

use shortcut_engine::testing::{ManualClock, ScriptedKeys};
use shortcut_engine::{Action, ActionSpec, Binding, KeyCode, ShortcutRegistry};

/// A registry wired to a hand-driven clock and keyboard.
pub struct Harness {
    pub clock: Rc<ManualClock>,
    pub keys: Rc<ScriptedKeys>,
    pub registry: ShortcutRegistry,
}

impl Harness {
    pub fn new() -> Self {
        let clock = Rc::new(ManualClock::new());
        let keys = Rc::new(ScriptedKeys::new());
        let registry = ShortcutRegistry::new(clock.clone(), keys.clone());
        Self {
            clock,
            keys,
            registry,
        }
    }

    pub fn with_actions<I>(actions: I) -> Self
    where
        I: IntoIterator<Item = Action>,
    {
        let mut harness = Self::new();
        harness.registry.register_all(actions);
        harness
    }

    /// End the current frame and start the next one.
    pub fn next_frame(&self) {
        self.keys.end_frame();
        self.clock.advance();
    }

    /// Press `binding` this frame, holding its modifiers.
    pub fn press(&self, binding: Binding) {
        self.keys.hold_modifiers(binding.modifiers);
        self.keys.press(binding.key);
    }
}

pub fn plain(c: char) -> Binding {
    Binding::plain(KeyCode::from_char(c))
}

pub fn ctrl(c: char) -> Binding {
    plain(c).with_ctrl()
}

pub fn global(id: &str, binding: Binding) -> Action {
    ActionSpec::global(id, id)
        .with_binding(binding)
        .build()
        .expect("valid global action")
}

pub fn panel_focused(id: &str, panel: &str, binding: Binding) -> Action {
    ActionSpec::panel_focused(id, id, panel)
        .with_binding(binding)
        .build()
        .expect("valid panel action")
}
