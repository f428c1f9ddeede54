//! The fixed chord table: key combinations to shell actions.

use std::collections::HashMap;

use multibrowser_common::{Action, ZoomStep};

pub const MOD_CTRL: u8 = 0b0001;
pub const MOD_ALT: u8 = 0b0010;
pub const MOD_SHIFT: u8 = 0b0100;
pub const MOD_SUPER: u8 = 0b1000;

/// A canonical key representation for fast HashMap lookup.
///
/// Modifiers are stored as a bitmask for O(1) comparison. Key names are
/// the normalized forms the app derives from winit events ("1", "Left",
/// "F5", "=").
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// Bitmask: Ctrl=1, Alt=2, Shift=4, Super=8.
    pub mods: u8,
    /// Normalized key name.
    pub key: String,
}

impl KeyCombo {
    /// Build from raw modifier booleans and a normalized key name.
    pub fn from_parts(ctrl: bool, alt: bool, shift: bool, super_key: bool, key: String) -> Self {
        let mut mods = 0u8;
        if ctrl {
            mods |= MOD_CTRL;
        }
        if alt {
            mods |= MOD_ALT;
        }
        if shift {
            mods |= MOD_SHIFT;
        }
        if super_key {
            mods |= MOD_SUPER;
        }
        Self { mods, key }
    }

    fn alt(key: &str) -> Self {
        Self {
            mods: MOD_ALT,
            key: key.into(),
        }
    }

    fn ctrl(key: &str) -> Self {
        Self {
            mods: MOD_CTRL,
            key: key.into(),
        }
    }

    fn bare(key: &str) -> Self {
        Self {
            mods: 0,
            key: key.into(),
        }
    }
}

/// Maps the reserved chord set to [`Action`]s.
///
/// These are window-level shortcuts: the app consults the router before
/// any page sees the key, so the reserved set always wins over in-page
/// handlers.
pub struct ShortcutRouter {
    bindings: HashMap<KeyCombo, Action>,
}

impl ShortcutRouter {
    /// The built-in binding table.
    ///
    /// - `Alt+1`..`Alt+9` focus tabs 0-8; `Alt+0` always targets tab 9.
    /// - `Alt+Left` / `Alt+Right` cycle with wrap-around.
    /// - `F5` reloads the current tab.
    /// - `Ctrl+=` / `Ctrl++` / `Ctrl+-` / `Ctrl+0` drive zoom.
    /// - `Ctrl+Shift+Delete` clears the shared profile's browsing data.
    pub fn with_default_bindings() -> Self {
        let mut bindings = HashMap::new();

        for digit in 1..=9usize {
            bindings.insert(KeyCombo::alt(&digit.to_string()), Action::FocusTab(digit - 1));
        }
        bindings.insert(KeyCombo::alt("0"), Action::FocusTab(9));

        bindings.insert(KeyCombo::alt("Left"), Action::PrevTab);
        bindings.insert(KeyCombo::alt("Right"), Action::NextTab);
        bindings.insert(KeyCombo::bare("F5"), Action::ReloadTab);

        bindings.insert(KeyCombo::ctrl("="), Action::Zoom(ZoomStep::In));
        bindings.insert(KeyCombo::ctrl("+"), Action::Zoom(ZoomStep::In));
        bindings.insert(KeyCombo::ctrl("-"), Action::Zoom(ZoomStep::Out));
        bindings.insert(KeyCombo::ctrl("0"), Action::Zoom(ZoomStep::Reset));

        bindings.insert(
            KeyCombo {
                mods: MOD_CTRL | MOD_SHIFT,
                key: "Delete".into(),
            },
            Action::ClearBrowsingData,
        );

        Self { bindings }
    }

    /// Look up the action for a key combination.
    pub fn lookup(&self, combo: &KeyCombo) -> Option<Action> {
        self.bindings.get(combo).copied()
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
