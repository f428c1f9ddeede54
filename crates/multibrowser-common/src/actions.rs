use serde::{Deserialize, Serialize};

/// A manual zoom adjustment on the current tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoomStep {
    /// Increase the zoom factor by 0.1.
    In,
    /// Decrease the zoom factor by 0.1.
    Out,
    /// Reset to the default factor of 1.0.
    Reset,
}

/// Every user-triggerable action in the shell.
///
/// The fixed chord set resolves to an `Action`; the app dispatcher
/// matches on this enum to route to the tab model or zoom controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Switch to the tab at this index. No-op past the tab count.
    FocusTab(usize),
    /// Cycle to the next tab, wrapping at the end.
    NextTab,
    /// Cycle to the previous tab, wrapping at the start.
    PrevTab,
    /// Reload the current tab's page.
    ReloadTab,
    /// Adjust zoom on the current tab and persist the new factor.
    Zoom(ZoomStep),
    /// Clear cookies and cache for the shared profile, then reload all tabs.
    ClearBrowsingData,
}
