//! Tab, zoom, and shortcut bookkeeping.
//!
//! Pure shell logic with no toolkit types: the tab model and its
//! display-label rules, per-URL zoom persistence, the fixed chord
//! table, and the theme palettes. The app crate wires these onto
//! winit/wry surfaces.

pub mod shortcuts;
pub mod tabs;
pub mod theme;
pub mod zoom;

pub use shortcuts::{KeyCombo, ShortcutRouter};
pub use tabs::{TabModel, TabRecord};
pub use theme::ThemePalette;
pub use zoom::ZoomController;
