use std::path::PathBuf;

use multibrowser_common::ConfigError;

pub(crate) const APP_NAME: &str = "multibrowser";

/// Returns the platform-specific configuration directory.
///
/// - macOS: `~/Library/Application Support/multibrowser`
/// - Linux: `$XDG_CONFIG_HOME/multibrowser` (defaults to `~/.config/multibrowser`)
/// - Windows: `%APPDATA%\multibrowser`
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| ConfigError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific data directory.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| ConfigError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Path to the persistent settings file.
///
/// Located at `config_dir()/multibrowser.json`.
pub fn settings_file() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("multibrowser.json"))
}

/// Storage root for the shared browsing profile (cookies, cache).
///
/// Located at `data_dir()/profile`. The web engine owns everything
/// beneath it.
pub fn profile_dir() -> Result<PathBuf, ConfigError> {
    Ok(data_dir()?.join("profile"))
}
