//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Composition root: wires the tab model, zoom controller,
//! and shortcut router onto the window and its tab webviews.

use std::sync::Arc;

use tracing::{debug, error, info, warn};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use multibrowser_common::{Action, Rect, TabSurface};
use multibrowser_shell::{KeyCombo, ShortcutRouter, TabModel, ThemePalette, ZoomController};
use multibrowser_webview::{PageLoadState, TabView, TabViewConfig, TabViewManager, WebViewEvent};

use crate::keys;

/// Events posted to the UI thread from outside the winit loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    /// Best-effort early zoom pass over every tab, fired ~2 s after
    /// startup. Each tab's load-finished restoration supersedes it.
    ZoomSweep,
}

/// Default window dimensions, logical pixels.
const WINDOW_SIZE: (f64, f64) = (1200.0, 800.0);

/// Top-level application state.
pub struct ShellApp {
    window_class: Option<String>,
    palette: ThemePalette,
    model: TabModel,
    router: ShortcutRouter,
    zoom: ZoomController,
    manager: TabViewManager,

    // Windowing
    window: Option<Arc<Window>>,
    views: Vec<TabView>,

    // Modifier tracking (winit sends these separately)
    modifiers: winit::keyboard::ModifiersState,
}

impl ShellApp {
    pub fn new(
        window_class: Option<String>,
        palette: ThemePalette,
        model: TabModel,
        router: ShortcutRouter,
        zoom: ZoomController,
        manager: TabViewManager,
    ) -> Self {
        Self {
            window_class,
            palette,
            model,
            router,
            zoom,
            manager,
            window: None,
            views: Vec::new(),
            modifiers: winit::keyboard::ModifiersState::empty(),
        }
    }

    fn window_attributes(&self) -> winit::window::WindowAttributes {
        let attrs = Window::default_attributes()
            .with_title(self.base_title())
            .with_inner_size(LogicalSize::new(WINDOW_SIZE.0, WINDOW_SIZE.1));

        #[cfg(target_os = "linux")]
        let attrs = {
            use winit::platform::wayland::WindowAttributesExtWayland;
            use winit::platform::x11::WindowAttributesExtX11;
            match &self.window_class {
                Some(class) => {
                    let attrs = WindowAttributesExtX11::with_name(attrs, class, class);
                    WindowAttributesExtWayland::with_name(attrs, class, class)
                }
                None => attrs,
            }
        };

        attrs
    }

    fn base_title(&self) -> String {
        self.window_class
            .clone()
            .unwrap_or_else(|| "MultiBrowser".to_string())
    }

    fn client_bounds(&self) -> Rect {
        let size = self
            .window
            .as_ref()
            .map(|w| w.inner_size())
            .unwrap_or_else(|| winit::dpi::PhysicalSize::new(0, 0));
        Rect {
            x: 0,
            y: 0,
            width: size.width,
            height: size.height,
        }
    }

    /// Show the current tab's surface, hide the rest, refresh the title.
    fn sync_current_tab(&mut self) {
        let current = self.model.current_index();
        for (i, view) in self.views.iter().enumerate() {
            if let Err(e) = view.set_visible(i == current) {
                warn!(index = i, "failed to toggle tab visibility: {e}");
            }
        }
        if let Some(view) = self.views.get(current) {
            if let Err(e) = view.focus() {
                debug!(index = current, "failed to focus tab: {e}");
            }
        }
        self.update_window_title();
    }

    /// Window title: app name plus the current tab's display label.
    ///
    /// The label comes from the configured title, never the live page.
    fn update_window_title(&self) {
        let Some(window) = &self.window else {
            return;
        };
        match self.model.current_record() {
            Some(record) => window.set_title(&format!(
                "{} — {}",
                self.base_title(),
                record.display_label()
            )),
            None => window.set_title(&self.base_title()),
        }
    }

    fn dispatch(&mut self, action: Action) {
        debug!(?action, "dispatching");
        match action {
            Action::FocusTab(index) => {
                self.model.set_current_index(index);
                self.sync_current_tab();
            }
            Action::NextTab => {
                self.model.next();
                self.sync_current_tab();
            }
            Action::PrevTab => {
                self.model.previous();
                self.sync_current_tab();
            }
            Action::ReloadTab => {
                if let Some(view) = self.views.get(self.model.current_index()) {
                    if let Err(e) = view.reload() {
                        warn!("failed to reload current tab: {e}");
                    }
                }
            }
            Action::Zoom(step) => {
                let index = self.model.current_index();
                if let (Some(record), Some(view)) =
                    (self.model.record_mut(index), self.views.get(index))
                {
                    self.zoom.manual_zoom(record, view, step);
                }
            }
            Action::ClearBrowsingData => self.clear_browsing_data(),
        }
    }

    /// Clear the shared profile's cookies and cache, then reload every
    /// tab for a fresh session.
    fn clear_browsing_data(&self) {
        info!("clearing browsing data for the shared profile");
        if let Some(view) = self.views.first() {
            if let Err(e) = view.clear_browsing_data() {
                warn!("failed to clear browsing data: {e}");
            }
        }
        for view in &self.views {
            if let Err(e) = view.reload() {
                warn!(index = view.index(), "failed to reload tab: {e}");
            }
        }
    }

    fn restore_zoom_for(&mut self, index: usize) {
        if let (Some(record), Some(view)) = (self.model.record_mut(index), self.views.get(index)) {
            self.zoom.restore_zoom(record, view);
        }
    }

    fn handle_webview_event(&mut self, event: WebViewEvent) {
        match event {
            WebViewEvent::PageLoad {
                index,
                state: PageLoadState::Finished,
                url,
            } => {
                // Authoritative zoom restoration for the settled URL.
                self.model.on_url_changed(index, url.clone());
                if let Some(view) = self.views.get_mut(index) {
                    view.set_tracked_url(url);
                }
                self.restore_zoom_for(index);
            }
            WebViewEvent::PageLoad { .. } => {}
            WebViewEvent::UrlChanged { index, url } => {
                self.model.on_url_changed(index, url.clone());
                if let Some(view) = self.views.get_mut(index) {
                    view.set_tracked_url(url);
                }
            }
            WebViewEvent::TitleChanged { index, .. } => {
                // The configured title is authoritative; re-assert it.
                if index == self.model.current_index() {
                    self.update_window_title();
                }
            }
        }
    }
}

impl ApplicationHandler<ShellEvent> for ShellApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(self.window_attributes()) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };
        self.window = Some(Arc::clone(&window));

        let bounds = self.client_bounds();
        let background = self.palette.background_rgba();
        for record in self.model.records() {
            let config = TabViewConfig {
                background,
                ..TabViewConfig::with_url(&record.url)
            };
            let wry_bounds = wry::Rect {
                position: wry::dpi::PhysicalPosition::new(bounds.x, bounds.y).into(),
                size: wry::dpi::PhysicalSize::new(bounds.width, bounds.height).into(),
            };
            match self
                .manager
                .create(record.index, window.as_ref(), wry_bounds, config)
            {
                Ok(view) => self.views.push(view),
                Err(e) => {
                    error!(index = record.index, "failed to create tab webview: {e}");
                    event_loop.exit();
                    return;
                }
            }
        }

        info!("{} tabs ready", self.views.len());
        self.sync_current_tab();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("window closed, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(_) => {
                let bounds = self.client_bounds();
                for view in &self.views {
                    if let Err(e) = view.set_bounds(bounds) {
                        warn!(index = view.index(), "failed to resize tab: {e}");
                    }
                }
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                let Some(key) = keys::normalize_key(&event.logical_key) else {
                    return;
                };
                let combo = KeyCombo::from_parts(
                    self.modifiers.control_key(),
                    self.modifiers.alt_key(),
                    self.modifiers.shift_key(),
                    self.modifiers.super_key(),
                    key,
                );
                if let Some(action) = self.router.lookup(&combo) {
                    self.dispatch(action);
                }
            }
            _ => {}
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: ShellEvent) {
        match event {
            ShellEvent::ZoomSweep => {
                debug!("startup zoom sweep over {} tabs", self.views.len());
                for index in 0..self.views.len() {
                    self.restore_zoom_for(index);
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        for event in self.manager.drain_events() {
            self.handle_webview_event(event);
        }
    }
}
