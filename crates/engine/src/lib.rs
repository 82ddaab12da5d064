//! Shortcut dispatch engine.
//!
//! Maps key combinations to editor actions, picks the most specific binding
//! and the highest-priority applicable action, and fires at most one action
//! per frame. Binding overrides are persisted through `shortcut-config`.

pub mod action;
pub mod context;
pub mod error;
pub mod input;
pub mod registry;
pub mod scope;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use action::{Action, ActionSpec, DEFAULT_CATEGORY};
pub use context::{FrameContext, UiContext};
pub use error::ActionError;
pub use input::{FrameClock, FrameId, KeyState, PlayModeEvent};
pub use registry::{BindingEntry, Handler, ShortcutRegistry, layout_default};
pub use scope::{
    CONFLICT_MATRIX, ConflictRule, SCOPE_PRIORITY, Scope, ScopeKind, conflict_rule,
    scopes_conflict,
};
pub use shortcut_config::{Binding, KeyCode, KeyboardLayout, Modifiers};
