//! Built-in theme palettes.

use multibrowser_config::Theme;

/// Colors for the window chrome and webview backdrop.
///
/// Values are `#rrggbb` strings; [`ThemePalette::background_rgba`]
/// converts the backdrop for toolkits that take raw channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub background: &'static str,
    pub foreground: &'static str,
    pub tab_background: &'static str,
    pub tab_foreground: &'static str,
    pub accent: &'static str,
}

const DARK: ThemePalette = ThemePalette {
    background: "#1e1e1e",
    foreground: "#ffffff",
    tab_background: "#252526",
    tab_foreground: "#ffffff",
    accent: "#0078d7",
};

const TOKYO_NIGHT: ThemePalette = ThemePalette {
    background: "#1a1b26",
    foreground: "#c0caf5",
    tab_background: "#16161e",
    tab_foreground: "#7aa2f7",
    accent: "#7aa2f7",
};

impl ThemePalette {
    /// The palette for a configured theme.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => DARK,
            Theme::TokyoNight => TOKYO_NIGHT,
        }
    }

    /// The backdrop color as opaque RGBA channels.
    pub fn background_rgba(&self) -> (u8, u8, u8, u8) {
        let (r, g, b) = parse_hex(self.background).unwrap_or((0, 0, 0));
        (r, g, b, 255)
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_match_themes() {
        assert_eq!(ThemePalette::for_theme(Theme::Dark).background, "#1e1e1e");
        assert_eq!(
            ThemePalette::for_theme(Theme::TokyoNight).background,
            "#1a1b26"
        );
    }

    #[test]
    fn background_rgba_parses_hex() {
        let palette = ThemePalette::for_theme(Theme::TokyoNight);
        assert_eq!(palette.background_rgba(), (0x1a, 0x1b, 0x26, 255));
    }

    #[test]
    fn bad_hex_falls_back_to_black() {
        let palette = ThemePalette {
            background: "not-a-color",
            ..DARK
        };
        assert_eq!(palette.background_rgba(), (0, 0, 0, 255));
    }
}
