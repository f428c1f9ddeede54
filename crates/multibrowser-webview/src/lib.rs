//! wry-backed tab surfaces.
//!
//! `TabViewManager` creates one `wry::WebView` per configured tab, all
//! sharing a single persistent browsing profile. Page events are pushed
//! into a queue the UI loop drains each turn.

pub mod events;
pub mod manager;
pub mod tab_view;

pub use events::{PageLoadState, WebViewEvent};
pub use manager::TabViewManager;
pub use tab_view::{TabView, TabViewConfig};
