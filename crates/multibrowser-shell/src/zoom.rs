//! Per-URL zoom persistence.

use multibrowser_common::{TabSurface, ZoomStep};
use multibrowser_config::{ConfigStore, PersistentConfig};
use tracing::{debug, warn};

use crate::tabs::TabRecord;

/// Zoom factor applied when a URL has no stored entry.
const DEFAULT_ZOOM: f64 = 1.0;
/// Increment for a single zoom-in/out step.
const ZOOM_STEP: f64 = 0.1;

/// Applies stored zoom factors to tab surfaces and persists manual
/// changes.
///
/// Owns the persistent config for the session: zoom mutations go
/// through here and are written to disk immediately via the store.
/// Factors are keyed by exact URL string; redirects and trailing-slash
/// variants get separate entries.
pub struct ZoomController {
    store: ConfigStore,
    config: PersistentConfig,
}

impl ZoomController {
    pub fn new(store: ConfigStore, config: PersistentConfig) -> Self {
        Self { store, config }
    }

    /// The stored factor for a URL, if any.
    pub fn stored_zoom(&self, url: &str) -> Option<f64> {
        self.config.zoom_factors.get(url).copied()
    }

    /// Apply the stored zoom factor for the tab's current URL.
    ///
    /// With no stored entry the default of 1.0 is applied but not
    /// persisted, so untouched tabs never pollute the settings file.
    /// Runs once in the startup sweep and again, authoritatively, on
    /// each load-finished event.
    pub fn restore_zoom(&self, record: &mut TabRecord, surface: &dyn TabSurface) {
        let factor = self.stored_zoom(&record.url).unwrap_or(DEFAULT_ZOOM);
        if let Err(e) = surface.set_zoom(factor) {
            warn!("failed to restore zoom for {}: {e}", record.url);
            return;
        }
        record.zoom = factor;
        debug!("restored zoom {factor} for {}", record.url);
    }

    /// Apply a manual zoom step and persist the result under the tab's
    /// exact URL key.
    pub fn manual_zoom(&mut self, record: &mut TabRecord, surface: &dyn TabSurface, step: ZoomStep) {
        let factor = match step {
            ZoomStep::In => record.zoom + ZOOM_STEP,
            ZoomStep::Out => record.zoom - ZOOM_STEP,
            ZoomStep::Reset => DEFAULT_ZOOM,
        };

        if let Err(e) = surface.set_zoom(factor) {
            warn!("failed to set zoom {factor} on {}: {e}", record.url);
            return;
        }

        record.zoom = factor;
        self.config.zoom_factors.insert(record.url.clone(), factor);
        self.store.persist(&self.config);
        debug!("saved zoom {factor} for {}", record.url);
    }
}
