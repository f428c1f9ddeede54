//! Tab-list file: the ordered set of pages the shell opens at startup.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

fn default_title() -> String {
    "New Tab".into()
}

fn default_url() -> String {
    "about:blank".into()
}

/// One configured tab: `{title, url}`. Either field may be omitted in
/// the file and defaults independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabEntry {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_url")]
    pub url: String,
}

impl TabEntry {
    /// The single fallback tab used when the tab-list file is unusable.
    pub fn home() -> Self {
        Self {
            title: "Home".into(),
            url: "about:blank".into(),
        }
    }
}

/// Load the ordered tab list from a JSON array of `{title, url}` objects.
///
/// Fail-open: a missing, unreadable, or malformed file yields a single
/// Home tab rather than an error. The set is fixed for the whole run.
pub fn load_tabs(path: &Path) -> Vec<TabEntry> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(
                "tab list {} not readable ({e}), starting with default tab",
                path.display()
            );
            return vec![TabEntry::home()];
        }
    };

    match serde_json::from_str::<Vec<TabEntry>>(&content) {
        Ok(entries) => {
            info!("loaded {} tabs from {}", entries.len(), path.display());
            entries
        }
        Err(e) => {
            warn!(
                "failed to parse tab list {} ({e}), starting with default tab",
                path.display()
            );
            vec![TabEntry::home()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_tabs(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("tabs.json");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_ordered_entries() {
        let dir = TempDir::new().unwrap();
        let path = write_tabs(
            &dir,
            r#"[
                {"title": "Mail", "url": "https://mail.example"},
                {"title": "Chat", "url": "https://chat.example"}
            ]"#,
        );

        let tabs = load_tabs(&path);
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0].title, "Mail");
        assert_eq!(tabs[1].url, "https://chat.example");
    }

    #[test]
    fn fields_default_independently() {
        let dir = TempDir::new().unwrap();
        let path = write_tabs(&dir, r#"[{"title": "Docs"}, {"url": "https://x.example"}, {}]"#);

        let tabs = load_tabs(&path);
        assert_eq!(tabs.len(), 3);
        assert_eq!(tabs[0].title, "Docs");
        assert_eq!(tabs[0].url, "about:blank");
        assert_eq!(tabs[1].title, "New Tab");
        assert_eq!(tabs[1].url, "https://x.example");
        assert_eq!(tabs[2].title, "New Tab");
        assert_eq!(tabs[2].url, "about:blank");
    }

    #[test]
    fn empty_array_is_honored() {
        let dir = TempDir::new().unwrap();
        let path = write_tabs(&dir, "[]");
        assert!(load_tabs(&path).is_empty());
    }

    #[test]
    fn missing_file_falls_back_to_home() {
        let dir = TempDir::new().unwrap();
        let tabs = load_tabs(&dir.path().join("nope.json"));
        assert_eq!(tabs, vec![TabEntry::home()]);
    }

    #[test]
    fn malformed_json_falls_back_to_home() {
        let dir = TempDir::new().unwrap();
        let path = write_tabs(&dir, "{\"title\": \"not an array\"}");
        assert_eq!(load_tabs(&path), vec![TabEntry::home()]);
    }
}
