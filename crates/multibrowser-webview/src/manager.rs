//! Tab webview lifecycle management.
//!
//! `TabViewManager` owns the shared `wry::WebContext` (the persistent
//! cookie/cache profile) and creates one child webview per tab record.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::raw_window_handle;
use wry::{WebContext, WebViewBuilder};

use crate::events::{PageLoadState, WebViewEvent};
use crate::tab_view::{TabView, TabViewConfig};

/// Creates and tracks tab webviews over one persistent profile.
pub struct TabViewManager {
    /// Shared browsing profile. Cookies, local storage, and the HTTP
    /// cache live under its data directory and persist across runs.
    context: WebContext,
    /// Event sink; handlers push here, the UI loop drains.
    events: Arc<Mutex<Vec<WebViewEvent>>>,
}

impl TabViewManager {
    /// Create a manager whose profile is rooted at `profile_dir`.
    ///
    /// Pass `None` for an ephemeral profile (used in tests).
    pub fn new(profile_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = &profile_dir {
            debug!(path = %dir.display(), "persistent profile directory");
        }
        Self {
            context: WebContext::new(profile_dir),
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }

    /// Create the webview for one tab as a child of the given window.
    ///
    /// The webview shares the manager's profile, starts hidden, and is
    /// positioned at `bounds` within the parent window.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        index: usize,
        window: &W,
        bounds: wry::Rect,
        config: TabViewConfig,
    ) -> Result<TabView, wry::Error> {
        let mut builder = WebViewBuilder::new_with_web_context(&mut self.context)
            .with_bounds(bounds)
            .with_background_color(config.background)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_autoplay(config.autoplay)
            .with_focused(false)
            .with_visible(false)
            .with_url(&config.url);

        builder = Self::attach_page_load_handler(builder, Arc::clone(&self.events), index);
        builder = Self::attach_navigation_handler(builder, Arc::clone(&self.events), index);
        builder = Self::attach_title_handler(builder, Arc::clone(&self.events), index);

        let webview = builder.build_as_child(window)?;

        debug!(index, url = %config.url, "tab webview created");

        Ok(TabView {
            webview,
            index,
            tracked_url: config.url,
        })
    }

    fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        index: usize,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(index, ?state, url = %url, "page load");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::PageLoad { index, state, url });
            }
        })
    }

    fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        index: usize,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            debug!(index, url = %url, "navigation");
            match events.lock() {
                Ok(mut evts) => evts.push(WebViewEvent::UrlChanged { index, url }),
                Err(_) => warn!(index, "event queue poisoned, dropping navigation event"),
            }
            // Tabs navigate freely; there is no address bar to escape from.
            true
        })
    }

    fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        index: usize,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::TitleChanged { index, title });
            }
        })
    }
}
