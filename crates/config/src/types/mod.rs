//! Configuration types for persisted shortcut bindings.
//!
//! Responsibilities:
//! - Re-export keyboard layout and binding table types.
//!
//! Does NOT handle:
//! - Reading or writing config files (see `persistence`).
//! - Binding string parsing (see `keybind` at crate root).

pub mod layout;
pub mod shortcut_config;

pub use layout::KeyboardLayout;
pub use shortcut_config::{BindingMap, ShortcutConfig};
