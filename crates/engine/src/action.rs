//! Action metadata and its validated construction.
//!
//! Responsibilities:
//! - Describe an action (`ActionSpec`) with every field explicit.
//! - Validate an `ActionSpec` into an immutable `Action`.
//! - Decide whether an action is applicable in a given UI context.
//!
//! Does NOT handle:
//! - Handlers (the registry keeps them in a separate, mutable table).
//! - Effective bindings after user overrides (see the registry).
//!
//! Invariants:
//! - Panel-scoped actions always carry a non-blank panel id; other scopes never do.
//! - An `Action` is immutable once built; its id never changes.

use shortcut_config::Binding;

use crate::context::UiContext;
use crate::error::ActionError;
use crate::scope::{Scope, ScopeKind};

/// Category used for ids without a dot.
pub const DEFAULT_CATEGORY: &str = "general";

/// Unvalidated description of an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSpec {
    /// Dot-hierarchical id, e.g. `editor.file.save`.
    pub id: String,
    pub display_name: String,
    pub default_binding: Option<Binding>,
    pub scope: ScopeKind,
    /// Required for `PanelFocused` and `PanelVisible`, rejected otherwise.
    pub panel_id: Option<String>,
    pub allow_in_text_input: bool,
    pub allow_in_popup: bool,
}

impl ActionSpec {
    fn base(id: &str, display_name: &str, scope: ScopeKind, panel_id: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            default_binding: None,
            scope,
            panel_id: panel_id.map(str::to_string),
            allow_in_text_input: false,
            allow_in_popup: false,
        }
    }

    pub fn global(id: &str, display_name: &str) -> Self {
        Self::base(id, display_name, ScopeKind::Global, None)
    }

    pub fn popup(id: &str, display_name: &str) -> Self {
        Self::base(id, display_name, ScopeKind::Popup, None)
    }

    pub fn panel_focused(id: &str, display_name: &str, panel_id: &str) -> Self {
        Self::base(id, display_name, ScopeKind::PanelFocused, Some(panel_id))
    }

    pub fn panel_visible(id: &str, display_name: &str, panel_id: &str) -> Self {
        Self::base(id, display_name, ScopeKind::PanelVisible, Some(panel_id))
    }

    pub fn with_binding(mut self, binding: Binding) -> Self {
        self.default_binding = Some(binding);
        self
    }

    pub fn allow_in_text_input(mut self) -> Self {
        self.allow_in_text_input = true;
        self
    }

    pub fn allow_in_popup(mut self) -> Self {
        self.allow_in_popup = true;
        self
    }

    /// Validate into an [`Action`].
    pub fn build(self) -> Result<Action, ActionError> {
        Action::new(self)
    }
}

/// A validated, immutable action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    id: String,
    display_name: String,
    category: String,
    default_binding: Option<Binding>,
    scope: Scope,
    allow_in_text_input: bool,
    allow_in_popup: bool,
}

impl Action {
    /// Validate a spec.
    ///
    /// # Errors
    /// - [`ActionError::EmptyId`] for a blank id.
    /// - [`ActionError::MissingPanelId`] for a panel scope without a panel id.
    /// - [`ActionError::UnexpectedPanelId`] for a panel id on a non-panel scope.
    /// - [`ActionError::InvalidDefaultBinding`] for a default binding that
    ///   could not be written to a binding file.
    pub fn new(spec: ActionSpec) -> Result<Self, ActionError> {
        let id = spec.id.trim().to_string();
        if id.is_empty() {
            return Err(ActionError::EmptyId);
        }

        let panel_id = spec
            .panel_id
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        if spec.scope.requires_panel() != panel_id.is_some() {
            let scope = spec.scope;
            return Err(match panel_id {
                None => ActionError::MissingPanelId { id, scope },
                Some(panel_id) => ActionError::UnexpectedPanelId {
                    id,
                    scope,
                    panel_id,
                },
            });
        }

        let scope = match (spec.scope, panel_id) {
            (ScopeKind::PanelFocused, Some(panel)) => Scope::PanelFocused(panel),
            (ScopeKind::PanelVisible, Some(panel)) => Scope::PanelVisible(panel),
            (ScopeKind::Popup, _) => Scope::Popup,
            _ => Scope::Global,
        };

        let default_binding = match spec.default_binding.map(Binding::validated).transpose() {
            Ok(binding) => binding,
            Err(source) => return Err(ActionError::InvalidDefaultBinding { id, source }),
        };

        Ok(Self {
            category: category_of(&id).to_string(),
            id,
            display_name: spec.display_name,
            default_binding,
            scope,
            allow_in_text_input: spec.allow_in_text_input,
            allow_in_popup: spec.allow_in_popup,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The id minus its last segment.
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn default_binding(&self) -> Option<Binding> {
        self.default_binding
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn panel_id(&self) -> Option<&str> {
        self.scope.panel_id()
    }

    pub fn allows_text_input(&self) -> bool {
        self.allow_in_text_input
    }

    pub fn allows_popup(&self) -> bool {
        self.allow_in_popup
    }

    /// Whether this action may fire in `context`.
    pub fn is_applicable(&self, context: &dyn UiContext) -> bool {
        if context.text_input_active() && !self.allow_in_text_input {
            return false;
        }

        match &self.scope {
            Scope::Popup => context.popup_open(),
            Scope::PanelFocused(panel) => context.panel_focused(panel),
            Scope::PanelVisible(panel) => context.panel_visible(panel),
            Scope::Global => self.allow_in_popup || !context.popup_open(),
        }
    }
}

fn category_of(id: &str) -> &str {
    match id.rsplit_once('.') {
        Some((category, _)) if !category.is_empty() => category,
        _ => DEFAULT_CATEGORY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::FrameContext;
    use shortcut_config::{KeyCode, Modifiers};

    fn ctrl_s() -> Binding {
        Binding::plain(KeyCode::Char('S')).with_ctrl()
    }

    #[test]
    fn test_build_global_action() {
        let action = ActionSpec::global("editor.file.save", "Save")
            .with_binding(ctrl_s())
            .build()
            .unwrap();

        assert_eq!(action.id(), "editor.file.save");
        assert_eq!(action.display_name(), "Save");
        assert_eq!(action.category(), "editor.file");
        assert_eq!(action.default_binding(), Some(ctrl_s()));
        assert_eq!(action.scope(), &Scope::Global);
        assert_eq!(action.panel_id(), None);
    }

    #[test]
    fn test_category_without_dot() {
        let action = ActionSpec::global("quit", "Quit").build().unwrap();
        assert_eq!(action.category(), DEFAULT_CATEGORY);
    }

    #[test]
    fn test_panel_scope_without_panel_is_error() {
        let spec = ActionSpec {
            panel_id: None,
            ..ActionSpec::panel_focused("tool.brush", "Brush", "sceneView")
        };
        assert_eq!(
            Action::new(spec),
            Err(ActionError::MissingPanelId {
                id: "tool.brush".into(),
                scope: ScopeKind::PanelFocused,
            })
        );

        let blank = ActionSpec::panel_visible("console.clear", "Clear", "   ");
        assert!(matches!(
            Action::new(blank),
            Err(ActionError::MissingPanelId { .. })
        ));
    }

    #[test]
    fn test_panel_on_global_scope_is_error() {
        let spec = ActionSpec {
            panel_id: Some("sceneView".into()),
            ..ActionSpec::global("editor.file.save", "Save")
        };
        assert!(matches!(
            Action::new(spec),
            Err(ActionError::UnexpectedPanelId { .. })
        ));
    }

    #[test]
    fn test_requires_panel_matches_panel_scopes() {
        for kind in ScopeKind::ALL {
            let spec = ActionSpec {
                scope: kind,
                panel_id: None,
                ..ActionSpec::global("any.action", "Any")
            };
            assert_eq!(Action::new(spec).is_err(), kind.requires_panel(), "{kind}");
        }
    }

    #[test]
    fn test_default_binding_is_normalized() {
        let action = ActionSpec::global("file.save", "Save")
            .with_binding(Binding {
                key: KeyCode::Char('s'),
                modifiers: Modifiers::CTRL,
            })
            .build()
            .unwrap();
        assert_eq!(action.default_binding(), Some(ctrl_s()));
    }

    #[test]
    fn test_unrepresentable_default_binding_is_error() {
        let result = ActionSpec::global("help.open", "Help")
            .with_binding(Binding::plain(KeyCode::F(0)))
            .build();
        assert!(matches!(
            result,
            Err(ActionError::InvalidDefaultBinding { ref id, .. }) if id == "help.open"
        ));
    }

    #[test]
    fn test_empty_id_is_error() {
        assert_eq!(
            ActionSpec::global("  ", "Nothing").build(),
            Err(ActionError::EmptyId)
        );
    }

    #[test]
    fn test_text_input_blocks_unless_allowed() {
        let ctx = FrameContext::new().with_text_input_active(true);
        let save = ActionSpec::global("file.save", "Save").build().unwrap();
        let escape = ActionSpec::global("ui.cancel", "Cancel")
            .allow_in_text_input()
            .build()
            .unwrap();

        assert!(!save.allows_text_input());
        assert!(escape.allows_text_input());
        assert!(!save.is_applicable(&ctx));
        assert!(escape.is_applicable(&ctx));
    }

    #[test]
    fn test_global_blocked_by_popup_unless_allowed() {
        let ctx = FrameContext::new().with_popup_open(true);
        let save = ActionSpec::global("file.save", "Save").build().unwrap();
        let help = ActionSpec::global("help.open", "Help")
            .allow_in_popup()
            .build()
            .unwrap();

        assert!(!save.allows_popup());
        assert!(help.allows_popup());
        assert!(!save.is_applicable(&ctx));
        assert!(help.is_applicable(&ctx));
        assert!(save.is_applicable(&FrameContext::new()));
    }

    #[test]
    fn test_popup_scope_requires_open_popup() {
        let confirm = ActionSpec::popup("popup.confirm", "Confirm").build().unwrap();
        assert!(!confirm.is_applicable(&FrameContext::new()));
        assert!(confirm.is_applicable(&FrameContext::new().with_popup_open(true)));
    }

    #[test]
    fn test_panel_scopes_follow_focus_and_visibility() {
        let brush = ActionSpec::panel_focused("tool.brush", "Brush", "sceneView")
            .build()
            .unwrap();
        let pan = ActionSpec::panel_visible("camera.pan", "Pan", "sceneView")
            .build()
            .unwrap();

        let visible_only = FrameContext::new().with_visible_panel("sceneView");
        assert!(!brush.is_applicable(&visible_only));
        assert!(pan.is_applicable(&visible_only));

        let focused = FrameContext::new().with_focused_panel("sceneView");
        assert!(brush.is_applicable(&focused));
        assert!(pan.is_applicable(&focused));
    }
}
