//! Handle to one tab's webview.

use multibrowser_common::{Rect, SurfaceError, TabSurface};
use wry::dpi::{PhysicalPosition, PhysicalSize};
use wry::WebView;

/// Configuration for creating a tab's webview.
#[derive(Debug, Clone)]
pub struct TabViewConfig {
    /// Initial URL to load.
    pub url: String,
    /// Opaque backdrop painted behind pages, from the active theme.
    pub background: (u8, u8, u8, u8),
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Whether to enable clipboard access.
    pub clipboard: bool,
    /// Whether to enable autoplay for media.
    pub autoplay: bool,
}

impl TabViewConfig {
    /// Create a config that loads a URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            background: (0, 0, 0, 255),
            devtools: cfg!(debug_assertions),
            clipboard: true,
            autoplay: true,
        }
    }
}

/// A managed webview bound to one tab slot.
///
/// Tracks its URL best-effort so the shell can key zoom factors even
/// when the engine-side query fails.
pub struct TabView {
    pub(crate) webview: WebView,
    pub(crate) index: usize,
    pub(crate) tracked_url: String,
}

impl TabView {
    /// The tab index this webview belongs to.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Update the tracked URL from a drained navigation event.
    pub fn set_tracked_url(&mut self, url: impl Into<String>) {
        self.tracked_url = url.into();
    }

    fn to_wry_rect(bounds: Rect) -> wry::Rect {
        wry::Rect {
            position: PhysicalPosition::new(bounds.x, bounds.y).into(),
            size: PhysicalSize::new(bounds.width, bounds.height).into(),
        }
    }
}

impl TabSurface for TabView {
    fn navigate(&mut self, url: &str) -> Result<(), SurfaceError> {
        self.tracked_url = url.to_string();
        self.webview
            .load_url(url)
            .map_err(|e| SurfaceError(e.to_string()))
    }

    fn reload(&self) -> Result<(), SurfaceError> {
        self.webview.reload().map_err(|e| SurfaceError(e.to_string()))
    }

    fn current_url(&self) -> String {
        self.webview
            .url()
            .unwrap_or_else(|_| self.tracked_url.clone())
    }

    fn set_zoom(&self, factor: f64) -> Result<(), SurfaceError> {
        self.webview
            .zoom(factor)
            .map_err(|e| SurfaceError(e.to_string()))
    }

    fn set_bounds(&self, bounds: Rect) -> Result<(), SurfaceError> {
        self.webview
            .set_bounds(Self::to_wry_rect(bounds))
            .map_err(|e| SurfaceError(e.to_string()))
    }

    fn set_visible(&self, visible: bool) -> Result<(), SurfaceError> {
        self.webview
            .set_visible(visible)
            .map_err(|e| SurfaceError(e.to_string()))
    }

    fn focus(&self) -> Result<(), SurfaceError> {
        self.webview.focus().map_err(|e| SurfaceError(e.to_string()))
    }

    fn clear_browsing_data(&self) -> Result<(), SurfaceError> {
        self.webview
            .clear_all_browsing_data()
            .map_err(|e| SurfaceError(e.to_string()))
    }
}
