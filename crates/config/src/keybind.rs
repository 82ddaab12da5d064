//! Key bindings: parsing, display, and key-state queries.
//!
//! Responsibilities:
//! - Parse human-readable binding strings ("Ctrl+Shift+S", "F5") into `Binding`.
//! - Render bindings back into the same grammar for config files and UI labels.
//! - Answer pressed/held queries by delegating to a host-supplied `KeyState`.
//!
//! Does NOT handle:
//! - Polling the physical keyboard (the host implements `KeyState`).
//! - Deciding which action a binding triggers (see the engine crate).
//!
//! Invariants:
//! - Equality and hashing depend only on the key and the modifier set.
//! - Modifiers are always emitted in the canonical order Ctrl, Shift, Alt, Meta.
//! - Letter keys are stored upper-case, so "ctrl+s" and "Ctrl+S" are the same binding.
//! - A key with no spelling in the grammar is never written to a config file.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors that can occur when parsing a binding string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeybindError {
    /// Invalid binding syntax
    #[error("Invalid key syntax: '{key}'. Expected format like 'S', 'Ctrl+S', 'Ctrl+Shift+Z', 'F5'")]
    InvalidSyntax {
        /// The invalid binding string
        key: String,
    },

    /// Unknown key name
    #[error("Unknown key name: '{name}'")]
    UnknownKey {
        /// The unknown key name
        name: String,
    },

    /// The same modifier was given twice
    #[error("Duplicate modifier '{modifier}' in '{key}'")]
    DuplicateModifier {
        /// The full binding string
        key: String,
        /// The repeated modifier
        modifier: String,
    },

    /// The key cannot be spelled in the binding grammar
    #[error("Key {key} cannot be written to a binding file")]
    UnrepresentableKey {
        /// Debug form of the rejected key
        key: String,
    },
}

/// Physical key names understood by the binding grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyCode {
    /// A character key. Letters are always upper-case.
    Char(char),
    /// Function key F1-F24
    F(u8),
    /// Escape key
    Esc,
    /// Enter/Return key
    Enter,
    /// Space bar
    Space,
    /// Tab key
    Tab,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Insert key
    Insert,
    /// Home key
    Home,
    /// End key
    End,
    /// Page Up key
    PageUp,
    /// Page Down key
    PageDown,
    /// Up arrow key
    Up,
    /// Down arrow key
    Down,
    /// Left arrow key
    Left,
    /// Right arrow key
    Right,
}

impl KeyCode {
    /// Highest supported function key number.
    pub const MAX_FUNCTION_KEY: u8 = 24;

    /// Builds a character key, folding ASCII letters to upper-case and
    /// mapping `' '` to [`KeyCode::Space`].
    pub fn from_char(c: char) -> Self {
        Self::Char(c).normalized()
    }

    /// Canonical form of the key: ASCII letters upper-case, and space, tab
    /// and newline characters replaced by their named keys.
    pub const fn normalized(self) -> Self {
        match self {
            Self::Char(' ') => Self::Space,
            Self::Char('\t') => Self::Tab,
            Self::Char('\n' | '\r') => Self::Enter,
            Self::Char(c) => Self::Char(c.to_ascii_uppercase()),
            other => other,
        }
    }

    /// True when the key's name parses back to the same key.
    ///
    /// Whitespace and control characters have no spelling, and function
    /// keys are limited to F1-F24.
    pub fn is_representable(&self) -> bool {
        match *self {
            Self::Char(c) => !c.is_whitespace() && !c.is_control(),
            Self::F(n) => (1..=Self::MAX_FUNCTION_KEY).contains(&n),
            _ => true,
        }
    }

    /// Parse a key name (without modifiers).
    pub fn from_name(name: &str) -> Result<Self, KeybindError> {
        let name_lower = name.to_ascii_lowercase();

        match name_lower.as_str() {
            "esc" | "escape" => return Ok(Self::Esc),
            "enter" | "return" => return Ok(Self::Enter),
            "space" => return Ok(Self::Space),
            "tab" => return Ok(Self::Tab),
            "backspace" => return Ok(Self::Backspace),
            "delete" | "del" => return Ok(Self::Delete),
            "insert" | "ins" => return Ok(Self::Insert),
            "home" => return Ok(Self::Home),
            "end" => return Ok(Self::End),
            "pageup" | "page_up" | "pgup" => return Ok(Self::PageUp),
            "pagedown" | "page_down" | "pgdn" => return Ok(Self::PageDown),
            "up" => return Ok(Self::Up),
            "down" => return Ok(Self::Down),
            "left" => return Ok(Self::Left),
            "right" => return Ok(Self::Right),
            "plus" => return Ok(Self::Char('+')),
            _ => {}
        }

        if let Some(num_str) = name_lower.strip_prefix('f')
            && let Ok(num) = num_str.parse::<u8>()
            && (1..=Self::MAX_FUNCTION_KEY).contains(&num)
        {
            return Ok(Self::F(num));
        }

        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && !c.is_control()
        {
            return Ok(Self::from_char(c));
        }

        Err(KeybindError::UnknownKey {
            name: name.to_string(),
        })
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char('+') => write!(f, "Plus"),
            Self::Char(c) => write!(f, "{}", c),
            Self::F(n) => write!(f, "F{}", n),
            Self::Esc => write!(f, "Esc"),
            Self::Enter => write!(f, "Enter"),
            Self::Space => write!(f, "Space"),
            Self::Tab => write!(f, "Tab"),
            Self::Backspace => write!(f, "Backspace"),
            Self::Delete => write!(f, "Delete"),
            Self::Insert => write!(f, "Insert"),
            Self::Home => write!(f, "Home"),
            Self::End => write!(f, "End"),
            Self::PageUp => write!(f, "PageUp"),
            Self::PageDown => write!(f, "PageDown"),
            Self::Up => write!(f, "Up"),
            Self::Down => write!(f, "Down"),
            Self::Left => write!(f, "Left"),
            Self::Right => write!(f, "Right"),
        }
    }
}

/// Modifier flags for key combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Modifiers {
    /// Control key
    pub ctrl: bool,
    /// Shift key
    pub shift: bool,
    /// Alt/Option key
    pub alt: bool,
    /// Meta/Command/Super key
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
        meta: false,
    };
    /// Control only.
    pub const CTRL: Self = Self {
        ctrl: true,
        ..Self::NONE
    };
    /// Shift only.
    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };
    /// Alt only.
    pub const ALT: Self = Self {
        alt: true,
        ..Self::NONE
    };
    /// Meta only.
    pub const META: Self = Self {
        meta: true,
        ..Self::NONE
    };

    /// Number of active modifier flags.
    pub fn count(&self) -> usize {
        [self.ctrl, self.shift, self.alt, self.meta]
            .into_iter()
            .filter(|held| *held)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// True when every flag set in `required` is also set in `self`.
    pub fn contains(&self, required: Modifiers) -> bool {
        (!required.ctrl || self.ctrl)
            && (!required.shift || self.shift)
            && (!required.alt || self.alt)
            && (!required.meta || self.meta)
    }

    /// Modifier names in canonical order.
    fn names(&self) -> impl Iterator<Item = &'static str> {
        [
            (self.ctrl, "Ctrl"),
            (self.shift, "Shift"),
            (self.alt, "Alt"),
            (self.meta, "Meta"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = self.names().collect();
        if parts.is_empty() {
            write!(f, "None")
        } else {
            write!(f, "{}", parts.join("+"))
        }
    }
}

/// Source of physical key state for the current frame.
///
/// Implemented by the host's input poller. `key_pressed` is edge-triggered
/// (true only on the frame the key went down), `key_held` is level-triggered.
pub trait KeyState {
    /// True only on the frame the key transitioned into "down".
    fn key_pressed(&self, key: KeyCode) -> bool;
    /// True while the key is physically down.
    fn key_held(&self, key: KeyCode) -> bool;
    /// Modifier keys currently held.
    fn modifiers_held(&self) -> Modifiers;
}

/// A physical key plus a modifier set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Binding {
    pub key: KeyCode,
    pub modifiers: Modifiers,
}

impl Binding {
    /// Builds a binding with the key in its canonical form.
    pub const fn new(key: KeyCode, modifiers: Modifiers) -> Self {
        Self {
            key: key.normalized(),
            modifiers,
        }
    }

    /// A binding with no modifiers.
    pub const fn plain(key: KeyCode) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    pub const fn with_ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    pub const fn with_shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    pub const fn with_alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }

    pub const fn with_meta(mut self) -> Self {
        self.modifiers.meta = true;
        self
    }

    /// Specificity of the binding: how many modifiers it requires.
    pub fn modifier_count(&self) -> usize {
        self.modifiers.count()
    }

    /// Canonical copy of a binding that may have been built field by field,
    /// rejecting keys that could not be read back from a config file.
    pub fn validated(self) -> Result<Self, KeybindError> {
        let binding = Self::new(self.key, self.modifiers);
        if binding.key.is_representable() {
            Ok(binding)
        } else {
            Err(KeybindError::UnrepresentableKey {
                key: format!("{:?}", binding.key),
            })
        }
    }

    /// Label for menus and settings screens, e.g. `Ctrl+Shift+S`.
    pub fn display_string(&self) -> String {
        self.to_string()
    }

    /// Serialized form used in the persisted config.
    pub fn to_config_string(&self) -> String {
        self.to_string()
    }

    /// Parse a binding string like "Ctrl+S", "F5", "Ctrl+Shift+Z".
    ///
    /// # Examples
    ///
    /// ```
    /// use shortcut_config::keybind::{Binding, KeyCode};
    ///
    /// let save = Binding::from_config_string("Ctrl+S").unwrap();
    /// assert_eq!(save.key, KeyCode::Char('S'));
    /// assert!(save.modifiers.ctrl);
    /// assert_eq!(save.modifier_count(), 1);
    /// ```
    pub fn from_config_string(key_str: &str) -> Result<Self, KeybindError> {
        let key_str = key_str.trim();

        if key_str.is_empty() {
            return Err(KeybindError::InvalidSyntax {
                key: key_str.to_string(),
            });
        }

        let mut modifiers = Modifiers::NONE;
        let mut key_name: Option<&str> = None;

        for part in key_str.split('+').map(str::trim) {
            if part.is_empty() {
                return Err(KeybindError::InvalidSyntax {
                    key: key_str.to_string(),
                });
            }

            let flag = match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => Some(&mut modifiers.ctrl),
                "shift" => Some(&mut modifiers.shift),
                "alt" | "option" => Some(&mut modifiers.alt),
                "meta" | "cmd" | "command" | "super" => Some(&mut modifiers.meta),
                _ => None,
            };

            match flag {
                Some(flag) if *flag => {
                    return Err(KeybindError::DuplicateModifier {
                        key: key_str.to_string(),
                        modifier: part.to_string(),
                    });
                }
                Some(flag) => *flag = true,
                None if key_name.is_none() => key_name = Some(part),
                // Multiple non-modifier parts is invalid
                None => {
                    return Err(KeybindError::InvalidSyntax {
                        key: key_str.to_string(),
                    });
                }
            }
        }

        let Some(key_name) = key_name else {
            return Err(KeybindError::InvalidSyntax {
                key: key_str.to_string(),
            });
        };

        Ok(Self::new(KeyCode::from_name(key_name)?, modifiers))
    }

    /// Edge-triggered: the base key went down this frame while every
    /// required modifier is held.
    pub fn is_pressed(&self, keys: &dyn KeyState) -> bool {
        keys.key_pressed(self.key) && keys.modifiers_held().contains(self.modifiers)
    }

    /// Level-triggered: the base key and every required modifier are down.
    pub fn is_held(&self, keys: &dyn KeyState) -> bool {
        keys.key_held(self.key) && keys.modifiers_held().contains(self.modifiers)
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for name in self.modifiers.names() {
            write!(f, "{}+", name)?;
        }
        write!(f, "{}", self.key)
    }
}

impl FromStr for Binding {
    type Err = KeybindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_config_string(s)
    }
}

impl Serialize for Binding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let binding = self.validated().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&binding.to_config_string())
    }
}

impl<'de> Deserialize<'de> for Binding {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_config_string(&raw).map_err(serde::de::Error::custom)
    }
}
