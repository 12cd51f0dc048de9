// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Embedded web previews.
//!
//! A `WebPane` is one native child webview laid over an egui rect. The pane
//! always knows which page it should show; with the `webview` feature it
//! also owns a `wry::WebView` that loads that page. Unloading navigates the
//! view to `about:blank`, and dropping the pane destroys the view.
//!
//! Without the feature (or when the platform refuses to create a child
//! webview) callers paint the address instead.

#[cfg(feature = "webview")]
const BLANK: &str = "about:blank";

/// One embedded page.
#[derive(Default)]
pub struct WebPane {
    /// Page the pane should show; `None` means unloaded.
    target: Option<String>,
    visible: bool,
    /// Creating the native view failed once; don't retry every frame.
    failed: bool,
    #[cfg(feature = "webview")]
    view: Option<wry::WebView>,
}

impl WebPane {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page currently requested, `None` when unloaded.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether a native view is showing the page.
    pub fn is_embedded(&self) -> bool {
        #[cfg(feature = "webview")]
        {
            self.view.is_some()
        }
        #[cfg(not(feature = "webview"))]
        {
            false
        }
    }

    /// Load `url`, or unload with `None`.
    pub fn navigate(&mut self, url: Option<&str>) {
        if self.target.as_deref() == url {
            return;
        }
        self.target = url.map(str::to_string);

        #[cfg(feature = "webview")]
        {
            if let Some(view) = &self.view {
                if let Err(e) = view.load_url(url.unwrap_or(BLANK)) {
                    log::warn!("Failed to load {:?} in preview: {}", url, e);
                }
            }
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;

        #[cfg(feature = "webview")]
        {
            if let Some(view) = &self.view {
                if let Err(e) = view.set_visible(visible) {
                    log::warn!("Failed to change preview visibility: {}", e);
                }
            }
        }
    }

    /// Create the native view if needed and move it over `rect` (egui
    /// points). Does nothing without the `webview` feature.
    #[cfg_attr(not(feature = "webview"), allow(unused_variables))]
    pub fn place(&mut self, frame: &eframe::Frame, rect: egui::Rect, pixels_per_point: f32) {
        if self.failed {
            return;
        }

        #[cfg(feature = "webview")]
        {
            let bounds = wry::Rect {
                position: wry::dpi::Position::Physical(wry::dpi::PhysicalPosition::new(
                    (rect.min.x * pixels_per_point).round() as i32,
                    (rect.min.y * pixels_per_point).round() as i32,
                )),
                size: wry::dpi::Size::Physical(wry::dpi::PhysicalSize::new(
                    (rect.width() * pixels_per_point).round().max(1.0) as u32,
                    (rect.height() * pixels_per_point).round().max(1.0) as u32,
                )),
            };

            if let Some(view) = &self.view {
                if let Err(e) = view.set_bounds(bounds) {
                    log::warn!("Failed to move preview: {}", e);
                }
                return;
            }

            let built = wry::WebViewBuilder::new()
                .with_bounds(bounds)
                .with_url(self.target.as_deref().unwrap_or(BLANK))
                .with_visible(self.visible)
                .build_as_child(frame);
            match built {
                Ok(view) => self.view = Some(view),
                Err(e) => {
                    log::warn!("Embedded preview unavailable, showing addresses instead: {}", e);
                    self.failed = true;
                }
            }
        }

        #[cfg(not(feature = "webview"))]
        {
            self.failed = true;
        }
    }
}
