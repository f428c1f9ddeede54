//! The capability seam between the shell logic and the rendering widget.
//!
//! Everything the shell needs from a tab's rendering surface is captured
//! in [`TabSurface`]; the wry-backed implementation lives in
//! `multibrowser-webview`, and tests substitute a recording mock.

use crate::errors::SurfaceError;
use crate::types::Rect;

/// Capabilities a tab's rendering surface must expose.
///
/// All methods are fallible at the toolkit boundary; the shell treats
/// failures as non-fatal and logs them.
pub trait TabSurface {
    /// Navigate to a URL.
    fn navigate(&mut self, url: &str) -> Result<(), SurfaceError>;

    /// Reload the current page.
    fn reload(&self) -> Result<(), SurfaceError>;

    /// The surface's current URL, best-effort.
    fn current_url(&self) -> String;

    /// Set the page-rendering zoom factor.
    fn set_zoom(&self, factor: f64) -> Result<(), SurfaceError>;

    /// Position the surface within the parent window.
    fn set_bounds(&self, bounds: Rect) -> Result<(), SurfaceError>;

    /// Show or hide the surface.
    fn set_visible(&self, visible: bool) -> Result<(), SurfaceError>;

    /// Give the surface keyboard focus.
    fn focus(&self) -> Result<(), SurfaceError>;

    /// Clear cookies and cached data held by the surface's profile.
    fn clear_browsing_data(&self) -> Result<(), SurfaceError>;
}
