//! Error types for action construction.
//!
//! Invariants:
//! - Construction errors are programming errors in the action catalog; hosts
//!   propagate them with `?` so startup aborts instead of dispatching with a
//!   half-valid table.

use shortcut_config::KeybindError;
use thiserror::Error;

use crate::scope::ScopeKind;

/// Errors raised while validating an `ActionSpec`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("Action id must not be empty")]
    EmptyId,

    #[error("Action '{id}' has scope {scope} but no panel id")]
    MissingPanelId { id: String, scope: ScopeKind },

    #[error("Action '{id}' has scope {scope}, which does not take a panel id (got '{panel_id}')")]
    UnexpectedPanelId {
        id: String,
        scope: ScopeKind,
        panel_id: String,
    },

    #[error("Action '{id}' has an invalid default binding: {source}")]
    InvalidDefaultBinding {
        id: String,
        #[source]
        source: KeybindError,
    },
}
