//! The shortcut registry: action table, handler table, and dispatch state.
//!
//! Responsibilities:
//! - Own registered actions and their late-bound handlers.
//! - Own per-action binding overrides and the derived binding index.
//! - Own per-frame transient state (consumed keys, frame guard, play mode).
//!
//! Does NOT handle:
//! - Polling the keyboard or counting frames (injected collaborators).
//! - Deciding whether a rebinding is acceptable (callers use `find_conflicts`).
//!
//! Invariants:
//! - Action ids are unique; the first registration of an id wins.
//! - The index and sorted list are rebuilt after every change to actions or overrides.
//! - Nothing here is thread-safe; the registry lives on the frame-loop thread.

mod bindings;
mod dispatch;
mod index;

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::rc::Rc;

use shortcut_config::{Binding, ConfigManager, KeyCode};

use crate::action::Action;
use crate::input::{FrameClock, FrameId, KeyState};

pub use bindings::layout_default;
pub use index::BindingEntry;

/// Callback run when an action fires. Receives the registry so it can rebind
/// or register actions mid-dispatch.
pub type Handler = Rc<dyn Fn(&mut ShortcutRegistry)>;

/// Maps key combinations to actions and fires at most one per frame.
pub struct ShortcutRegistry {
    clock: Rc<dyn FrameClock>,
    keys: Rc<dyn KeyState>,

    /// Registration order is significant: it breaks priority ties.
    actions: Vec<Rc<Action>>,
    positions: HashMap<String, usize>,
    handlers: HashMap<String, Handler>,
    /// `None` is an explicit unbind.
    overrides: HashMap<String, Option<Binding>>,

    index: HashMap<Binding, Vec<Rc<Action>>>,
    sorted: Rc<[BindingEntry]>,

    consumed_keys: HashSet<KeyCode>,
    last_frame: Option<FrameId>,
    play_mode_active: bool,

    config: Option<ConfigManager>,
}

impl ShortcutRegistry {
    pub fn new(clock: Rc<dyn FrameClock>, keys: Rc<dyn KeyState>) -> Self {
        Self {
            clock,
            keys,
            actions: Vec::new(),
            positions: HashMap::new(),
            handlers: HashMap::new(),
            overrides: HashMap::new(),
            index: HashMap::new(),
            sorted: Rc::from(Vec::new()),
            consumed_keys: HashSet::new(),
            last_frame: None,
            play_mode_active: false,
            config: None,
        }
    }

    /// Return to the freshly constructed state, keeping only the collaborators.
    ///
    /// Any attached config is detached without saving.
    pub fn reset(&mut self) {
        *self = Self::new(Rc::clone(&self.clock), Rc::clone(&self.keys));
        tracing::debug!("Shortcut registry reset");
    }

    /// Register one action. A duplicate id is logged and ignored.
    ///
    /// Returns true if the action was added.
    pub fn register(&mut self, action: Action) -> bool {
        let added = self.insert_action(action);
        if added {
            self.rebuild_index();
        }
        added
    }

    /// Register many actions, rebuilding the index once.
    ///
    /// Returns the number of actions added.
    pub fn register_all<I>(&mut self, actions: I) -> usize
    where
        I: IntoIterator<Item = Action>,
    {
        let added = actions
            .into_iter()
            .map(|action| self.insert_action(action))
            .filter(|added| *added)
            .count();
        if added > 0 {
            self.rebuild_index();
        }
        added
    }

    fn insert_action(&mut self, action: Action) -> bool {
        if self.positions.contains_key(action.id()) {
            tracing::warn!(
                action_id = %action.id(),
                "Duplicate shortcut action registration ignored"
            );
            return false;
        }

        self.positions
            .insert(action.id().to_string(), self.actions.len());
        self.actions.push(Rc::new(action));
        true
    }

    /// Remove an action and its handler.
    ///
    /// Any override for the id is kept so a later re-registration picks it up.
    pub fn unregister(&mut self, id: &str) -> Option<Action> {
        let position = self.positions.remove(id)?;
        let removed = self.actions.remove(position);
        self.handlers.remove(id);

        self.positions = self
            .actions
            .iter()
            .enumerate()
            .map(|(i, action)| (action.id().to_string(), i))
            .collect();
        self.rebuild_index();

        tracing::debug!(action_id = %id, "Shortcut action unregistered");
        Some(Rc::try_unwrap(removed).unwrap_or_else(|shared| (*shared).clone()))
    }

    /// Attach the handler for an already-registered action, replacing any previous one.
    ///
    /// Returns false (and logs) if no action has this id.
    pub fn bind_handler<F>(&mut self, id: &str, handler: F) -> bool
    where
        F: Fn(&mut ShortcutRegistry) + 'static,
    {
        if !self.positions.contains_key(id) {
            tracing::warn!(action_id = %id, "Cannot bind handler: unknown action");
            return false;
        }
        self.handlers.insert(id.to_string(), Rc::new(handler));
        true
    }

    pub fn has_handler(&self, id: &str) -> bool {
        self.handlers.contains_key(id)
    }

    pub fn action(&self, id: &str) -> Option<&Action> {
        self.positions
            .get(id)
            .and_then(|&position| self.actions.get(position))
            .map(Rc::as_ref)
    }

    /// Registered actions in registration order.
    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter().map(Rc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl fmt::Debug for ShortcutRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortcutRegistry")
            .field("actions", &self.actions.len())
            .field("handlers", &self.handlers.len())
            .field("overrides", &self.overrides)
            .field("bindings", &self.sorted.len())
            .field("consumed_keys", &self.consumed_keys)
            .field("last_frame", &self.last_frame)
            .field("play_mode_active", &self.play_mode_active)
            .field("config", &self.config.as_ref().map(ConfigManager::path))
            .finish()
    }
}
