//! Keyboard layout selection.
//!
//! Responsibilities:
//! - Define the supported keyboard layouts and their persisted names.
//! - Translate QWERTY-positional bindings to the AZERTY key in the same place.
//!
//! Invariants:
//! - `KeyboardLayout` serializes as upper-case ("QWERTY", "AZERTY").
//! - `remap_from_qwerty` is the identity for `Qwerty` and for keys whose
//!   position does not differ between the two layouts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::keybind::{Binding, KeyCode};

/// A keyboard arrangement; selects which persisted binding table is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum KeyboardLayout {
    #[default]
    Qwerty,
    Azerty,
}

impl KeyboardLayout {
    /// All layouts, in persisted order.
    pub const ALL: [KeyboardLayout; 2] = [KeyboardLayout::Qwerty, KeyboardLayout::Azerty];

    /// Translate a binding authored against a QWERTY keyboard to the key
    /// occupying the same physical position on this layout.
    ///
    /// Only keys that differ between QWERTY and AZERTY are touched: A and Q
    /// swap, Z and W swap, `;` becomes M and M becomes `,`. The modifier set
    /// is always preserved.
    pub fn remap_from_qwerty(self, binding: Binding) -> Binding {
        match self {
            KeyboardLayout::Qwerty => binding,
            KeyboardLayout::Azerty => {
                let key = match binding.key {
                    KeyCode::Char('A') => KeyCode::Char('Q'),
                    KeyCode::Char('Q') => KeyCode::Char('A'),
                    KeyCode::Char('W') => KeyCode::Char('Z'),
                    KeyCode::Char('Z') => KeyCode::Char('W'),
                    KeyCode::Char(';') => KeyCode::Char('M'),
                    KeyCode::Char('M') => KeyCode::Char(','),
                    other => other,
                };
                Binding::new(key, binding.modifiers)
            }
        }
    }
}

impl fmt::Display for KeyboardLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Qwerty => write!(f, "QWERTY"),
            Self::Azerty => write!(f, "AZERTY"),
        }
    }
}

impl FromStr for KeyboardLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "qwerty" => Ok(Self::Qwerty),
            "azerty" => Ok(Self::Azerty),
            other => Err(format!(
                "Unknown keyboard layout '{}'. Expected 'qwerty' or 'azerty'",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_is_qwerty() {
        assert_eq!(KeyboardLayout::default(), KeyboardLayout::Qwerty);
    }

    #[test]
    fn test_serializes_upper_case() {
        assert_eq!(
            serde_json::to_string(&KeyboardLayout::Azerty).unwrap(),
            "\"AZERTY\""
        );
        let layout: KeyboardLayout = serde_json::from_str("\"QWERTY\"").unwrap();
        assert_eq!(layout, KeyboardLayout::Qwerty);
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("Azerty".parse::<KeyboardLayout>(), Ok(KeyboardLayout::Azerty));
        assert!("dvorak".parse::<KeyboardLayout>().is_err());
    }

    #[test]
    fn test_remap_moves_swapped_letters() {
        let undo = Binding::plain(KeyCode::Char('Z')).with_ctrl();
        let remapped = KeyboardLayout::Azerty.remap_from_qwerty(undo);
        assert_eq!(remapped, Binding::plain(KeyCode::Char('W')).with_ctrl());

        let save = Binding::plain(KeyCode::Char('S')).with_ctrl();
        assert_eq!(KeyboardLayout::Azerty.remap_from_qwerty(save), save);
        assert_eq!(KeyboardLayout::Qwerty.remap_from_qwerty(undo), undo);
    }

    #[test]
    fn test_remap_follows_physical_m_and_semicolon_keys() {
        let remap = |c: char| {
            KeyboardLayout::Azerty
                .remap_from_qwerty(Binding::plain(KeyCode::Char(c)))
                .key
        };
        assert_eq!(remap(';'), KeyCode::Char('M'));
        assert_eq!(remap('M'), KeyCode::Char(','));
        assert_eq!(remap('A'), KeyCode::Char('Q'));
        assert_eq!(remap('Q'), KeyCode::Char('A'));
    }
}
