//! Per-frame UI context supplied by the host.
//!
//! Responsibilities:
//! - Define the focus/visibility/popup oracle the registry consults.
//! - Provide `FrameContext`, a plain snapshot hosts can build each frame.
//!
//! Invariants:
//! - A context describes one frame; the registry never retains it.
//! - A focused panel is also reported as visible.

use std::collections::HashSet;

/// Focus, visibility, and popup state for the current frame.
pub trait UiContext {
    /// A text field has keyboard focus.
    fn text_input_active(&self) -> bool;
    /// A popup is open at the top UI layer.
    fn popup_open(&self) -> bool;
    fn panel_focused(&self, panel_id: &str) -> bool;
    fn panel_visible(&self, panel_id: &str) -> bool;
}

/// Snapshot of UI state for one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameContext {
    pub text_input_active: bool,
    pub popup_open: bool,
    pub focused_panel: Option<String>,
    pub visible_panels: HashSet<String>,
}

impl FrameContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text_input_active(mut self, active: bool) -> Self {
        self.text_input_active = active;
        self
    }

    pub fn with_popup_open(mut self, open: bool) -> Self {
        self.popup_open = open;
        self
    }

    pub fn with_focused_panel(mut self, panel_id: impl Into<String>) -> Self {
        self.focused_panel = Some(panel_id.into());
        self
    }

    pub fn with_visible_panel(mut self, panel_id: impl Into<String>) -> Self {
        self.visible_panels.insert(panel_id.into());
        self
    }
}

impl UiContext for FrameContext {
    fn text_input_active(&self) -> bool {
        self.text_input_active
    }

    fn popup_open(&self) -> bool {
        self.popup_open
    }

    fn panel_focused(&self, panel_id: &str) -> bool {
        self.focused_panel.as_deref() == Some(panel_id)
    }

    fn panel_visible(&self, panel_id: &str) -> bool {
        self.panel_focused(panel_id) || self.visible_panels.contains(panel_id)
    }
}
