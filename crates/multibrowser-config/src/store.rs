//! Persistent settings store: self-healing load, atomic save.

use std::path::{Path, PathBuf};

use multibrowser_common::ConfigError;
use tracing::{debug, info, warn};

use crate::paths;
use crate::schema::{PersistentConfig, Theme};

/// File-backed store for [`PersistentConfig`].
///
/// `load` never errors to the caller: any read failure yields defaults
/// and rewrites the file so a corrupted file self-repairs on the next
/// run. `save` failures propagate; use [`ConfigStore::persist`] on
/// paths where the session should continue with in-memory state.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store backed by the platform default path
    /// (`~/.config/multibrowser/multibrowser.json` on Linux).
    pub fn at_default_path() -> Result<Self, ConfigError> {
        Ok(Self {
            path: paths::settings_file()?,
        })
    }

    /// Store backed by a specific file path.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, substituting and persisting defaults on any failure.
    pub fn load(&self) -> PersistentConfig {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str::<PersistentConfig>(&content) {
                Ok(config) => {
                    info!("loaded settings from {}", self.path.display());
                    config
                }
                Err(e) => {
                    warn!(
                        "settings file {} is corrupt ({e}), rewriting defaults",
                        self.path.display()
                    );
                    self.heal()
                }
            },
            Err(e) => {
                info!(
                    "no settings at {} ({e}), creating defaults",
                    self.path.display()
                );
                self.heal()
            }
        }
    }

    /// Serialize and overwrite the settings file.
    ///
    /// Creates parent directories if needed. Writes to a `.tmp` sibling
    /// and renames so readers never observe a partial file.
    pub fn save(&self, config: &PersistentConfig) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|e| ConfigError::ParseError(format!("failed to serialize settings: {e}")))?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: parent.to_path_buf(),
                reason: e.to_string(),
            })?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, &json).map_err(|e| ConfigError::WriteError {
            path: tmp_path.clone(),
            reason: e.to_string(),
        })?;

        if let Err(e) = std::fs::rename(&tmp_path, &self.path) {
            // Rename can fail across devices and on Windows when the
            // destination exists; fall back to a direct write.
            warn!("atomic rename failed ({e}), falling back to direct write");
            std::fs::write(&self.path, &json).map_err(|e2| ConfigError::WriteError {
                path: self.path.clone(),
                reason: e2.to_string(),
            })?;
        }

        debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }

    /// Save, logging instead of propagating failure.
    ///
    /// The in-memory config stays authoritative for the session even
    /// when the disk write fails.
    pub fn persist(&self, config: &PersistentConfig) {
        if let Err(e) = self.save(config) {
            warn!("failed to persist settings: {e}");
        }
    }

    /// Fold CLI flags into the config, persisting when anything changed.
    ///
    /// An explicit `--theme` that differs from the stored value becomes
    /// the new default for future runs, as do the mode flags. When both
    /// mode flags are asserted, light wins; absent both, the stored
    /// preference is kept.
    pub fn apply_cli_overrides(
        &self,
        config: &mut PersistentConfig,
        theme: Option<Theme>,
        want_dark: bool,
        want_light: bool,
    ) {
        let mut updated = false;

        if let Some(theme) = theme {
            if theme != config.theme {
                info!("updated default theme to {theme}");
                config.theme = theme;
                updated = true;
            }
        }

        if want_light && config.dark_mode {
            info!("updated default mode to light");
            config.dark_mode = false;
            updated = true;
        } else if want_dark && !config.dark_mode {
            info!("updated default mode to dark");
            config.dark_mode = true;
            updated = true;
        }

        if updated {
            self.persist(config);
        }
    }

    fn heal(&self) -> PersistentConfig {
        let defaults = PersistentConfig::default();
        self.persist(&defaults);
        defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> ConfigStore {
        ConfigStore::from_path(dir.path().join("multibrowser.json"))
    }

    #[test]
    fn missing_file_yields_defaults_and_writes_them() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let config = store.load();
        assert_eq!(config, PersistentConfig::default());
        assert!(store.path().exists(), "defaults should be written back");
    }

    #[test]
    fn corrupt_file_self_heals_without_crash_loop() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "{not valid json").unwrap();

        let first = store.load();
        assert_eq!(first, PersistentConfig::default());

        // The heal write must leave a loadable file behind.
        let second = store.load();
        assert_eq!(second, PersistentConfig::default());
    }

    #[test]
    fn save_load_round_trip_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut config = PersistentConfig::default();
        config.theme = Theme::Dark;
        config.zoom_factors.insert("https://a.example/".into(), 0.9);
        store.save(&config).unwrap();

        let loaded = store.load();
        assert_eq!(loaded, config);

        store.save(&loaded).unwrap();
        assert_eq!(store.load(), config);
    }

    #[test]
    fn save_cleans_up_tmp_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&PersistentConfig::default()).unwrap();
        assert!(!dir.path().join("multibrowser.json.tmp").exists());
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::from_path(dir.path().join("nested").join("multibrowser.json"));

        store.save(&PersistentConfig::default()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn theme_override_persists_as_new_default() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let mut config = store.load();

        store.apply_cli_overrides(&mut config, Some(Theme::Dark), false, false);
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(store.load().theme, Theme::Dark);
    }

    #[test]
    fn light_wins_over_dark_when_both_asserted() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let mut config = store.load();
        assert!(config.dark_mode);

        store.apply_cli_overrides(&mut config, None, true, true);
        assert!(!config.dark_mode);
        assert!(!store.load().dark_mode);
    }

    #[test]
    fn absent_flags_keep_stored_preference() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let mut config = PersistentConfig::default();
        config.dark_mode = false;
        store.save(&config).unwrap();

        store.apply_cli_overrides(&mut config, None, false, false);
        assert!(!config.dark_mode);

        // No-op overrides must not rewrite the file with different content.
        assert!(!store.load().dark_mode);
    }

    #[test]
    fn dark_flag_restores_dark_mode() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let mut config = PersistentConfig::default();
        config.dark_mode = false;

        store.apply_cli_overrides(&mut config, None, true, false);
        assert!(config.dark_mode);
    }
}
