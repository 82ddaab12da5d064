//! Binding types and persistence for the shortcut dispatch engine.
//!
//! This crate owns the `Binding` value type, its string grammar, the
//! keyboard layouts, and loading/saving of user binding overrides.

pub mod constants;
mod env;
pub mod keybind;
pub mod persistence;
pub mod types;

pub use env::env_var_or_none;
pub use keybind::{Binding, KeyCode, KeyState, KeybindError, Modifiers};
pub use persistence::{ConfigFileError, ConfigManager};
pub use types::{BindingMap, KeyboardLayout, ShortcutConfig};
