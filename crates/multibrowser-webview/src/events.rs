//! Tab surface event types.

use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded (DOMContentLoaded + resources).
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by a tab's webview, tagged with the tab index.
///
/// The shell drains these on the UI thread; handlers never touch shell
/// state directly.
#[derive(Debug, Clone)]
pub enum WebViewEvent {
    /// Page load state changed. `Finished` triggers the authoritative
    /// zoom restoration for the tab.
    PageLoad {
        index: usize,
        state: PageLoadState,
        url: String,
    },
    /// The tab navigated to a new URL (link follow, redirect).
    UrlChanged { index: usize, url: String },
    /// The document title changed. The shell re-asserts the configured
    /// label instead of adopting it.
    TitleChanged { index: usize, title: String },
}
