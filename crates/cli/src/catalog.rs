//! Built-in editor action catalog.
//!
//! Default bindings are authored for QWERTY key positions; AZERTY defaults are
//! derived with `layout_default`.

use shortcut_config::{Binding, KeyCode};
use shortcut_engine::{Action, ActionError, ActionSpec};

pub const SCENE_VIEW: &str = "sceneView";
pub const HIERARCHY: &str = "hierarchy";
pub const CONSOLE: &str = "console";

const fn key(c: char) -> Binding {
    Binding::plain(KeyCode::Char(c))
}

const fn ctrl(c: char) -> Binding {
    key(c).with_ctrl()
}

/// Every action the editor declares, in registration order.
pub fn editor_actions() -> Result<Vec<Action>, ActionError> {
    [
        // File
        ActionSpec::global("editor.file.new", "New Scene").with_binding(ctrl('N')),
        ActionSpec::global("editor.file.open", "Open Scene").with_binding(ctrl('O')),
        ActionSpec::global("editor.file.save", "Save").with_binding(ctrl('S')),
        ActionSpec::global("editor.file.saveAs", "Save As").with_binding(ctrl('S').with_shift()),
        // Edit
        ActionSpec::global("editor.edit.undo", "Undo").with_binding(ctrl('Z')),
        ActionSpec::global("editor.edit.redo", "Redo").with_binding(ctrl('Y')),
        ActionSpec::global("editor.edit.copy", "Copy").with_binding(ctrl('C')),
        ActionSpec::global("editor.edit.paste", "Paste").with_binding(ctrl('V')),
        ActionSpec::global("editor.edit.duplicate", "Duplicate").with_binding(ctrl('D')),
        ActionSpec::global("editor.edit.selectAll", "Select All").with_binding(ctrl('A')),
        // Play mode and help
        ActionSpec::global("editor.play.toggle", "Play / Stop").with_binding(ctrl('P')),
        ActionSpec::global("editor.help.shortcuts", "Keyboard Shortcuts")
            .with_binding(Binding::plain(KeyCode::F(1)))
            .allow_in_popup(),
        ActionSpec::global("editor.ui.cancel", "Cancel")
            .with_binding(Binding::plain(KeyCode::Esc))
            .allow_in_text_input(),
        // Popups
        ActionSpec::popup("popup.confirm", "Confirm").with_binding(Binding::plain(KeyCode::Enter)),
        ActionSpec::popup("popup.cancel", "Close Popup").with_binding(Binding::plain(KeyCode::Esc)),
        // Scene view
        ActionSpec::panel_focused("scene.tool.select", "Select Tool", SCENE_VIEW)
            .with_binding(key('Q')),
        ActionSpec::panel_focused("scene.tool.move", "Move Tool", SCENE_VIEW).with_binding(key('W')),
        ActionSpec::panel_focused("scene.tool.rotate", "Rotate Tool", SCENE_VIEW)
            .with_binding(key('E')),
        ActionSpec::panel_focused("scene.tool.scale", "Scale Tool", SCENE_VIEW)
            .with_binding(key('R')),
        ActionSpec::panel_focused("scene.tool.brush", "Brush Tool", SCENE_VIEW)
            .with_binding(key('B')),
        ActionSpec::panel_focused("scene.entity.delete", "Delete Entity", SCENE_VIEW)
            .with_binding(Binding::plain(KeyCode::Delete)),
        ActionSpec::panel_visible("scene.camera.focus", "Focus Selection", SCENE_VIEW)
            .with_binding(key('F')),
        // Hierarchy
        ActionSpec::panel_focused("hierarchy.entity.rename", "Rename", HIERARCHY)
            .with_binding(Binding::plain(KeyCode::F(2))),
        ActionSpec::panel_focused("hierarchy.entity.delete", "Delete", HIERARCHY)
            .with_binding(Binding::plain(KeyCode::Delete)),
        // Console
        ActionSpec::panel_visible("console.clear", "Clear Console", CONSOLE).with_binding(ctrl('L')),
        // Unbound by default
        ActionSpec::global("debug.sayHi", "Say Hi"),
    ]
    .into_iter()
    .map(ActionSpec::build)
    .collect()
}
