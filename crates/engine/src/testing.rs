//! Scriptable collaborators for driving the registry in tests.
//!
//! Available to this crate's tests and, through the `test-utils` feature,
//! to integration tests and downstream hosts.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use shortcut_config::{KeyCode, KeyState, Modifiers};

use crate::input::{FrameClock, FrameId};
use crate::registry::ShortcutRegistry;

/// Frame clock advanced by hand.
#[derive(Debug)]
pub struct ManualClock {
    frame: Cell<FrameId>,
}

impl ManualClock {
    /// Starts at frame 1.
    pub fn new() -> Self {
        Self {
            frame: Cell::new(1),
        }
    }

    pub fn advance(&self) -> FrameId {
        let next = self.frame.get() + 1;
        self.frame.set(next);
        next
    }

    pub fn set(&self, frame: FrameId) {
        self.frame.set(frame);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for ManualClock {
    fn current_frame(&self) -> FrameId {
        self.frame.get()
    }
}

/// Key-state source driven by explicit press/release calls.
///
/// A key pressed with [`press`](Self::press) reads as pressed until
/// [`end_frame`](Self::end_frame) and as held until [`release`](Self::release).
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    pressed: RefCell<HashSet<KeyCode>>,
    held: RefCell<HashSet<KeyCode>>,
    modifiers: Cell<Modifiers>,
}

impl ScriptedKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&self, key: KeyCode) {
        self.pressed.borrow_mut().insert(key);
        self.held.borrow_mut().insert(key);
    }

    pub fn release(&self, key: KeyCode) {
        self.pressed.borrow_mut().remove(&key);
        self.held.borrow_mut().remove(&key);
    }

    pub fn hold_modifiers(&self, modifiers: Modifiers) {
        self.modifiers.set(modifiers);
    }

    pub fn release_modifiers(&self) {
        self.modifiers.set(Modifiers::NONE);
    }

    /// Clear the pressed edge; held keys stay held.
    pub fn end_frame(&self) {
        self.pressed.borrow_mut().clear();
    }
}

impl KeyState for ScriptedKeys {
    fn key_pressed(&self, key: KeyCode) -> bool {
        self.pressed.borrow().contains(&key)
    }

    fn key_held(&self, key: KeyCode) -> bool {
        self.held.borrow().contains(&key)
    }

    fn modifiers_held(&self) -> Modifiers {
        self.modifiers.get()
    }
}

/// Counts how often the handlers it hands out run.
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    calls: Rc<Cell<usize>>,
}

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handler(&self) -> impl Fn(&mut ShortcutRegistry) + 'static {
        let calls = Rc::clone(&self.calls);
        move |_| calls.set(calls.get() + 1)
    }

    pub fn count(&self) -> usize {
        self.calls.get()
    }
}
