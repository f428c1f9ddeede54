use std::path::PathBuf;

use clap::Parser;
use multibrowser_config::Theme;

/// MultiBrowser, a fixed-tab web shell.
#[derive(Parser, Debug)]
#[command(name = "multibrowser", version, about)]
pub struct Args {
    /// Path to the JSON tab list.
    #[arg(long, default_value = "tabs.json")]
    pub config: PathBuf,

    /// Window class for window manager identification.
    #[arg(long)]
    pub window_class: Option<String>,

    /// Color theme (dark, tokyo-night). Persisted as the new default.
    #[arg(long)]
    pub theme: Option<Theme>,

    /// Use dark mode and persist it as the default.
    #[arg(long)]
    pub dark_mode: bool,

    /// Use light mode and persist it as the default. Wins over
    /// --dark-mode when both are given.
    #[arg(long)]
    pub light_mode: bool,

    /// Log level override (e.g. "multibrowser=debug").
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["multibrowser"]);
        assert_eq!(args.config, PathBuf::from("tabs.json"));
        assert!(args.theme.is_none());
        assert!(!args.dark_mode);
        assert!(!args.light_mode);
    }

    #[test]
    fn theme_parses() {
        let args = Args::parse_from(["multibrowser", "--theme", "tokyo-night"]);
        assert_eq!(args.theme, Some(Theme::TokyoNight));
    }

    #[test]
    fn rejects_unknown_theme() {
        assert!(Args::try_parse_from(["multibrowser", "--theme", "solarized"]).is_err());
    }

    #[test]
    fn mode_flags() {
        let args = Args::parse_from(["multibrowser", "--dark-mode", "--light-mode"]);
        assert!(args.dark_mode);
        assert!(args.light_mode);
    }
}
