mod app;
mod cli;
mod keys;

use std::time::Duration;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use multibrowser_config::{paths, ConfigStore};
use multibrowser_shell::{ShortcutRouter, TabModel, ThemePalette, ZoomController};
use multibrowser_webview::TabViewManager;

use crate::app::{ShellApp, ShellEvent};

/// Delay before the best-effort startup zoom sweep.
const ZOOM_SWEEP_DELAY: Duration = Duration::from_secs(2);

fn init_tracing(level: Option<&str>) {
    let directive = level.unwrap_or("multibrowser=info");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    let args = cli::parse();
    init_tracing(args.log_level.as_deref());

    // Settings live in the platform config directory; fall back to the
    // working directory when the platform gives us nothing.
    let store = match ConfigStore::at_default_path() {
        Ok(store) => store,
        Err(e) => {
            warn!("no platform config directory ({e}), using ./multibrowser.json");
            ConfigStore::from_path("multibrowser.json")
        }
    };
    info!(path = %store.path().display(), "settings file");

    let mut config = store.load();
    store.apply_cli_overrides(&mut config, args.theme, args.dark_mode, args.light_mode);

    let palette = ThemePalette::for_theme(config.theme);
    info!(theme = %config.theme, dark_mode = config.dark_mode, "theme resolved");

    let entries = multibrowser_config::load_tabs(&args.config);
    info!(count = entries.len(), path = %args.config.display(), "tabs loaded");

    let model = TabModel::from_entries(&entries);
    let router = ShortcutRouter::with_default_bindings();
    let zoom = ZoomController::new(store, config);

    let profile_dir = match paths::profile_dir() {
        Ok(dir) => Some(dir),
        Err(e) => {
            warn!("no platform data directory ({e}), profile will be ephemeral");
            None
        }
    };
    let manager = TabViewManager::new(profile_dir);

    let event_loop = match EventLoop::<ShellEvent>::with_user_event().build() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            error!("failed to create event loop: {e}");
            std::process::exit(1);
        }
    };

    // Early zoom pass once the first pages have had a chance to render.
    // A send after shutdown is a no-op.
    let proxy = event_loop.create_proxy();
    std::thread::spawn(move || {
        std::thread::sleep(ZOOM_SWEEP_DELAY);
        let _ = proxy.send_event(ShellEvent::ZoomSweep);
    });

    let mut shell = ShellApp::new(args.window_class, palette, model, router, zoom, manager);
    if let Err(e) = event_loop.run_app(&mut shell) {
        error!("event loop error: {e}");
        std::process::exit(1);
    }
}
