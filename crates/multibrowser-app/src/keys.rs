//! Winit key normalization.
//!
//! Converts winit's `Key` values to the normalized names used by
//! [`KeyCombo`](multibrowser_shell::KeyCombo): `"1"`, `"Left"`, `"F5"`,
//! `"Delete"`, single characters uppercased.

use winit::keyboard::{Key, NamedKey};

/// Normalize a winit logical key for chord lookup.
///
/// Returns `None` for keys the chord table can never contain
/// (modifiers, media keys, IME keys).
pub fn normalize_key(key: &Key) -> Option<String> {
    match key {
        Key::Character(c) => {
            let s = c.as_str();
            if s.chars().count() == 1 {
                Some(s.to_uppercase())
            } else {
                Some(s.to_string())
            }
        }
        Key::Named(named) => {
            let name = match named {
                NamedKey::ArrowUp => "Up",
                NamedKey::ArrowDown => "Down",
                NamedKey::ArrowLeft => "Left",
                NamedKey::ArrowRight => "Right",
                NamedKey::Home => "Home",
                NamedKey::End => "End",
                NamedKey::PageUp => "PageUp",
                NamedKey::PageDown => "PageDown",
                NamedKey::Backspace => "Backspace",
                NamedKey::Delete => "Delete",
                NamedKey::Enter => "Enter",
                NamedKey::Tab => "Tab",
                NamedKey::Escape => "Escape",
                NamedKey::Space => "Space",
                NamedKey::F1 => "F1",
                NamedKey::F2 => "F2",
                NamedKey::F3 => "F3",
                NamedKey::F4 => "F4",
                NamedKey::F5 => "F5",
                NamedKey::F6 => "F6",
                NamedKey::F7 => "F7",
                NamedKey::F8 => "F8",
                NamedKey::F9 => "F9",
                NamedKey::F10 => "F10",
                NamedKey::F11 => "F11",
                NamedKey::F12 => "F12",
                _ => return None,
            };
            Some(name.to_string())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::SmolStr;

    #[test]
    fn digits_pass_through() {
        let key = Key::Character(SmolStr::new("1"));
        assert_eq!(normalize_key(&key).as_deref(), Some("1"));
    }

    #[test]
    fn letters_uppercase() {
        let key = Key::Character(SmolStr::new("g"));
        assert_eq!(normalize_key(&key).as_deref(), Some("G"));
    }

    #[test]
    fn punctuation_passes_through() {
        for c in ["=", "+", "-", "0"] {
            let key = Key::Character(SmolStr::new(c));
            assert_eq!(normalize_key(&key).as_deref(), Some(c));
        }
    }

    #[test]
    fn arrows_and_function_keys() {
        assert_eq!(
            normalize_key(&Key::Named(NamedKey::ArrowLeft)).as_deref(),
            Some("Left")
        );
        assert_eq!(
            normalize_key(&Key::Named(NamedKey::ArrowRight)).as_deref(),
            Some("Right")
        );
        assert_eq!(normalize_key(&Key::Named(NamedKey::F5)).as_deref(), Some("F5"));
        assert_eq!(
            normalize_key(&Key::Named(NamedKey::Delete)).as_deref(),
            Some("Delete")
        );
    }

    #[test]
    fn modifier_keys_are_ignored() {
        assert_eq!(normalize_key(&Key::Named(NamedKey::Alt)), None);
        assert_eq!(normalize_key(&Key::Named(NamedKey::Control)), None);
        assert_eq!(normalize_key(&Key::Named(NamedKey::Shift)), None);
    }
}
