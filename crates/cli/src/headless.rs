//! Inert input collaborators for a registry that never dispatches.

use shortcut_config::{KeyCode, KeyState, Modifiers};
use shortcut_engine::{FrameClock, FrameId};

/// Reports frame 0 and no keys down.
pub struct Headless;

impl FrameClock for Headless {
    fn current_frame(&self) -> FrameId {
        0
    }
}

impl KeyState for Headless {
    fn key_pressed(&self, _key: KeyCode) -> bool {
        false
    }

    fn key_held(&self, _key: KeyCode) -> bool {
        false
    }

    fn modifiers_held(&self) -> Modifiers {
        Modifiers::NONE
    }
}
