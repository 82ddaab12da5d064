//! Input-side collaborators consumed by the registry.
//!
//! The host owns the keyboard poller, the frame counter, and the simulation
//! lifecycle; the registry only reads them through these types.

use std::sync::mpsc::Receiver;

pub use shortcut_config::KeyState;

/// Monotonic id of a rendered frame.
pub type FrameId = u64;

/// Source of the current frame id.
pub trait FrameClock {
    fn current_frame(&self) -> FrameId;
}

/// Simulation lifecycle notifications. While a simulation runs it owns the
/// keyboard and no editor shortcut may fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayModeEvent {
    Started,
    Stopped,
}

impl PlayModeEvent {
    pub fn is_active(self) -> bool {
        matches!(self, PlayModeEvent::Started)
    }
}

/// Drain every pending event without blocking and return the last one.
pub(crate) fn latest_event(events: &Receiver<PlayModeEvent>) -> Option<PlayModeEvent> {
    events.try_iter().last()
}
