//! The ordered tab collection and its display-label rules.

use multibrowser_config::TabEntry;
use tracing::debug;

/// Titles longer than this get truncated in the tab label.
const TITLE_MAX_CHARS: usize = 25;
/// Truncated titles keep this many characters before the ellipsis.
const TITLE_KEEP_CHARS: usize = 22;

/// One configured tab slot.
///
/// Created once at startup; only `url` and `zoom` change afterwards as
/// the user navigates and zooms within the tab.
#[derive(Debug, Clone, PartialEq)]
pub struct TabRecord {
    /// 0-based position, immutable. Indices 0-9 double as digit-chord
    /// targets.
    pub index: usize,
    /// Authoritative display name from the tab-list file. The live page
    /// title never replaces it.
    pub configured_title: String,
    /// Current navigation URL; also the zoom-factor key.
    pub url: String,
    /// Zoom factor currently applied to the tab's surface.
    pub zoom: f64,
}

impl TabRecord {
    /// The label shown for this tab: shortcut prefix + truncated
    /// configured title.
    ///
    /// Tabs 0-8 get `(Alt+1)`..`(Alt+9)`; tab 9 gets `(Alt+0)` to match
    /// its actual chord; tabs past 9 get no prefix. Titles longer than
    /// 25 characters keep 22 and gain an ellipsis.
    pub fn display_label(&self) -> String {
        let title = truncate_title(&self.configured_title);
        match shortcut_digit(self.index) {
            Some(digit) => format!("(Alt+{digit}) {title}"),
            None => title,
        }
    }
}

fn truncate_title(title: &str) -> String {
    if title.chars().count() > TITLE_MAX_CHARS {
        let kept: String = title.chars().take(TITLE_KEEP_CHARS).collect();
        format!("{kept}…")
    } else {
        title.to_string()
    }
}

fn shortcut_digit(index: usize) -> Option<usize> {
    match index {
        0..=8 => Some(index + 1),
        9 => Some(0),
        _ => None,
    }
}

/// In-memory ordered collection of tab records plus the current index.
///
/// The set is fixed for the whole run; records are never added or
/// removed. All index arguments are bounds-checked and out-of-range
/// requests are silently ignored.
#[derive(Debug)]
pub struct TabModel {
    records: Vec<TabRecord>,
    current: usize,
}

impl TabModel {
    /// Build the record sequence from the configured tab entries,
    /// assigning indices by position.
    pub fn from_entries(entries: &[TabEntry]) -> Self {
        let records = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| TabRecord {
                index,
                configured_title: entry.title.clone(),
                url: entry.url.clone(),
                zoom: 1.0,
            })
            .collect();
        Self {
            records,
            current: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &TabRecord> {
        self.records.iter()
    }

    pub fn record(&self, index: usize) -> Option<&TabRecord> {
        self.records.get(index)
    }

    pub fn record_mut(&mut self, index: usize) -> Option<&mut TabRecord> {
        self.records.get_mut(index)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_record(&self) -> Option<&TabRecord> {
        self.records.get(self.current)
    }

    pub fn current_record_mut(&mut self) -> Option<&mut TabRecord> {
        self.records.get_mut(self.current)
    }

    /// Switch to the given tab. Out-of-range indices are ignored.
    pub fn set_current_index(&mut self, index: usize) {
        if index < self.records.len() {
            self.current = index;
        } else {
            debug!("ignoring switch to out-of-range tab {index}");
        }
    }

    /// Cycle to the next tab, wrapping at the end.
    pub fn next(&mut self) {
        if !self.records.is_empty() {
            self.current = (self.current + 1) % self.records.len();
        }
    }

    /// Cycle to the previous tab, wrapping at the start.
    pub fn previous(&mut self) {
        if !self.records.is_empty() {
            self.current = (self.current + self.records.len() - 1) % self.records.len();
        }
    }

    /// Record that a tab navigated to a new URL.
    ///
    /// Only the URL changes; the configured title (and thus the label)
    /// is untouched.
    pub fn on_url_changed(&mut self, index: usize, new_url: impl Into<String>) {
        if let Some(record) = self.records.get_mut(index) {
            record.url = new_url.into();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(n: usize) -> Vec<TabEntry> {
        (0..n)
            .map(|i| TabEntry {
                title: format!("Tab {i}"),
                url: format!("https://example.com/{i}"),
            })
            .collect()
    }

    #[test]
    fn builds_records_with_stable_indices() {
        for n in 0..12 {
            let model = TabModel::from_entries(&entries(n));
            assert_eq!(model.len(), n);
            for (i, record) in model.records().enumerate() {
                assert_eq!(record.index, i);
            }
        }
    }

    #[test]
    fn display_label_prefixes_first_ten_tabs() {
        let record = TabRecord {
            index: 0,
            configured_title: "Home".into(),
            url: "about:blank".into(),
            zoom: 1.0,
        };
        assert_eq!(record.display_label(), "(Alt+1) Home");
    }

    #[test]
    fn tenth_tab_label_uses_alt_zero() {
        let record = TabRecord {
            index: 9,
            configured_title: "Music".into(),
            url: "about:blank".into(),
            zoom: 1.0,
        };
        assert_eq!(record.display_label(), "(Alt+0) Music");
    }

    #[test]
    fn eleventh_tab_has_no_prefix() {
        let record = TabRecord {
            index: 10,
            configured_title: "Overflow".into(),
            url: "about:blank".into(),
            zoom: 1.0,
        };
        assert_eq!(record.display_label(), "Overflow");
    }

    #[test]
    fn long_titles_truncate_to_22_chars_plus_ellipsis() {
        let record = TabRecord {
            index: 2,
            configured_title: "An Extremely Long Tab Title That Overflows".into(),
            url: "about:blank".into(),
            zoom: 1.0,
        };
        assert_eq!(record.display_label(), "(Alt+3) An Extremely Long Tab …");
    }

    #[test]
    fn title_at_limit_is_untouched() {
        let title = "x".repeat(25);
        let record = TabRecord {
            index: 11,
            configured_title: title.clone(),
            url: "about:blank".into(),
            zoom: 1.0,
        };
        assert_eq!(record.display_label(), title);
    }

    #[test]
    fn multibyte_titles_truncate_on_char_boundaries() {
        let record = TabRecord {
            index: 10,
            configured_title: "ü".repeat(30),
            url: "about:blank".into(),
            zoom: 1.0,
        };
        assert_eq!(record.display_label(), format!("{}…", "ü".repeat(22)));
    }

    #[test]
    fn out_of_range_switch_is_ignored() {
        let mut model = TabModel::from_entries(&entries(3));
        model.set_current_index(2);
        model.set_current_index(7);
        assert_eq!(model.current_index(), 2);
    }

    #[test]
    fn cycling_wraps_both_directions() {
        let mut model = TabModel::from_entries(&entries(3));
        assert_eq!(model.current_index(), 0);

        model.previous();
        assert_eq!(model.current_index(), 2);

        model.next();
        assert_eq!(model.current_index(), 0);
    }

    #[test]
    fn cycling_with_no_tabs_is_a_no_op() {
        let mut model = TabModel::from_entries(&[]);
        model.next();
        model.previous();
        assert_eq!(model.current_index(), 0);
        assert!(model.current_record().is_none());
    }

    #[test]
    fn url_change_keeps_configured_label() {
        let mut model = TabModel::from_entries(&entries(2));
        model.on_url_changed(1, "https://elsewhere.example/page");

        let record = model.record(1).unwrap();
        assert_eq!(record.url, "https://elsewhere.example/page");
        assert_eq!(record.display_label(), "(Alt+2) Tab 1");
    }

    #[test]
    fn url_change_for_unknown_index_is_ignored() {
        let mut model = TabModel::from_entries(&entries(1));
        model.on_url_changed(5, "https://nowhere.example");
        assert_eq!(model.record(0).unwrap().url, "https://example.com/0");
    }
}
