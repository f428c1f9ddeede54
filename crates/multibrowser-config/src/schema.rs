//! Persistent settings schema.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Built-in color themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    Dark,
    TokyoNight,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::TokyoNight
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::TokyoNight => write!(f, "tokyo-night"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "tokyo-night" => Ok(Theme::TokyoNight),
            other => Err(format!("unknown theme '{other}' (expected dark or tokyo-night)")),
        }
    }
}

/// Settings persisted across runs.
///
/// Deserializes with per-field defaults so partial files work; a fresh
/// default is written back whenever the file is missing or corrupt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistentConfig {
    /// Selected color theme.
    pub theme: Theme,
    /// Dark-mode flag. Currently cosmetic; the theme choice dominates
    /// rendering.
    pub dark_mode: bool,
    /// Zoom factor per URL. Keys are exact post-navigation URL strings
    /// with no normalization, so redirects and trailing-slash variants
    /// get distinct entries.
    pub zoom_factors: BTreeMap<String, f64>,
}

impl Default for PersistentConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            dark_mode: true,
            zoom_factors: BTreeMap::new(),
        }
    }
}
