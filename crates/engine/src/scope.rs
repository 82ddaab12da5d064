//! Action scopes, their priority order, and the conflict matrix.
//!
//! Responsibilities:
//! - Define the closed set of scopes an action can be restricted to.
//! - Define the total priority order used to pick among eligible actions.
//! - Define which scope pairings count as conflicting for a shared binding.
//!
//! Does NOT handle:
//! - Evaluating a scope against the live UI (see `Action::is_applicable`).
//!
//! Invariants:
//! - `SCOPE_PRIORITY` lists every `ScopeKind` exactly once.
//! - `CONFLICT_MATRIX` is symmetric.

use std::fmt;

/// Scope without its panel id; indexes the priority and conflict tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    Global,
    Popup,
    PanelFocused,
    PanelVisible,
}

impl ScopeKind {
    /// All kinds, in conflict-matrix order.
    pub const ALL: [ScopeKind; 4] = [
        ScopeKind::Global,
        ScopeKind::Popup,
        ScopeKind::PanelFocused,
        ScopeKind::PanelVisible,
    ];

    const fn index(self) -> usize {
        match self {
            ScopeKind::Global => 0,
            ScopeKind::Popup => 1,
            ScopeKind::PanelFocused => 2,
            ScopeKind::PanelVisible => 3,
        }
    }

    /// Whether actions of this kind must name a panel.
    pub const fn requires_panel(self) -> bool {
        matches!(self, ScopeKind::PanelFocused | ScopeKind::PanelVisible)
    }

    /// Position in [`SCOPE_PRIORITY`]; lower ranks win.
    pub fn rank(self) -> usize {
        SCOPE_PRIORITY
            .iter()
            .position(|kind| *kind == self)
            .unwrap_or(SCOPE_PRIORITY.len())
    }
}

impl fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeKind::Global => write!(f, "global"),
            ScopeKind::Popup => write!(f, "popup"),
            ScopeKind::PanelFocused => write!(f, "panel-focused"),
            ScopeKind::PanelVisible => write!(f, "panel-visible"),
        }
    }
}

/// Where an action may fire.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Anywhere, unless a popup is open and the action does not allow it.
    Global,
    /// Only while a popup is open.
    Popup,
    /// Only while the named panel has focus.
    PanelFocused(String),
    /// Only while the named panel is on screen.
    PanelVisible(String),
}

impl Scope {
    pub fn kind(&self) -> ScopeKind {
        match self {
            Scope::Global => ScopeKind::Global,
            Scope::Popup => ScopeKind::Popup,
            Scope::PanelFocused(_) => ScopeKind::PanelFocused,
            Scope::PanelVisible(_) => ScopeKind::PanelVisible,
        }
    }

    pub fn panel_id(&self) -> Option<&str> {
        match self {
            Scope::PanelFocused(panel) | Scope::PanelVisible(panel) => Some(panel),
            Scope::Global | Scope::Popup => None,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.panel_id() {
            Some(panel) => write!(f, "{}({})", self.kind(), panel),
            None => write!(f, "{}", self.kind()),
        }
    }
}

/// Priority among eligible actions sharing one binding, highest first.
pub const SCOPE_PRIORITY: [ScopeKind; 4] = [
    ScopeKind::Popup,
    ScopeKind::PanelFocused,
    ScopeKind::PanelVisible,
    ScopeKind::Global,
];

/// How two scopes sharing a binding interact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictRule {
    /// Both can be eligible at once.
    Always,
    /// Conflict only when both name the same panel.
    SamePanel,
    /// Never both eligible in a way that matters.
    Never,
}

use ConflictRule::{Always, Never, SamePanel};

/// Rows and columns follow [`ScopeKind::ALL`]: Global, Popup, PanelFocused, PanelVisible.
pub const CONFLICT_MATRIX: [[ConflictRule; 4]; 4] = [
    // Global
    [Always, Never, Never, Never],
    // Popup
    [Never, Always, Never, Never],
    // PanelFocused
    [Never, Never, SamePanel, Never],
    // PanelVisible
    [Never, Never, Never, SamePanel],
];

pub fn conflict_rule(a: ScopeKind, b: ScopeKind) -> ConflictRule {
    CONFLICT_MATRIX[a.index()][b.index()]
}

/// Whether two actions with these scopes conflict when bound to the same keys.
pub fn scopes_conflict(a: &Scope, b: &Scope) -> bool {
    match conflict_rule(a.kind(), b.kind()) {
        ConflictRule::Always => true,
        ConflictRule::SamePanel => a.panel_id() == b.panel_id(),
        ConflictRule::Never => false,
    }
}
