// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Preview overlay window.
//!
//! Shows the work whose slot matches the window size: its caption, the
//! embedded page and a link that opens the work in the browser.

use super::webview::WebPane;
use crate::sky::preview::PreviewSurface;

/// Result of preview interaction.
pub enum PreviewAction {
    None,
    Close,
    OpenWork(String),
}

/// Overlay outputs as last written by the preview controller.
///
/// The embedded page lives in `pane`: setting the source navigates it and
/// clearing the source unloads it.
#[derive(Default)]
pub struct OverlayPreview {
    pane: WebPane,
    link: Option<String>,
    caption: String,
    visible: bool,
}

impl OverlayPreview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Page loaded in the embedded view, if any.
    pub fn source(&self) -> Option<&str> {
        self.pane.target()
    }
}

impl PreviewSurface for OverlayPreview {
    fn set_source(&mut self, url: Option<&str>) {
        self.pane.navigate(url);
    }

    fn set_link(&mut self, url: Option<&str>) {
        self.link = url.map(str::to_string);
    }

    fn set_caption(&mut self, text: &str) {
        self.caption = text.to_string();
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.pane.set_visible(visible);
    }
}

/// Display the overlay if it is visible.
pub fn show(ctx: &egui::Context, frame: &eframe::Frame, preview: &mut OverlayPreview) -> PreviewAction {
    if !preview.is_visible() {
        return PreviewAction::None;
    }
    let mut action = PreviewAction::None;

    egui::Window::new("preview")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&preview.caption).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✕").on_hover_text("Close preview").clicked() {
                        action = PreviewAction::Close;
                    }
                    if let Some(link) = &preview.link {
                        if ui.small_button("open ↗").on_hover_text(link.as_str()).clicked() {
                            action = PreviewAction::OpenWork(link.clone());
                        }
                    }
                });
            });

            let (rect, response) =
                ui.allocate_exact_size(egui::vec2(360.0, 220.0), egui::Sense::click());
            preview.pane.place(frame, rect, ctx.pixels_per_point());

            // The native view covers this rect when it exists; otherwise the
            // address stands in for the page and the whole rect is the link.
            if !preview.pane.is_embedded() {
                let painter = ui.painter_at(rect);
                painter.rect_filled(rect, 4.0, egui::Color32::from_gray(24));
                if let Some(source) = preview.source() {
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        source,
                        egui::FontId::monospace(12.0),
                        egui::Color32::from_gray(170),
                    );
                }

                let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);
                if response.clicked() {
                    if let Some(link) = &preview.link {
                        action = PreviewAction::OpenWork(link.clone());
                    }
                }
            }
        });

    action
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clearing_source_unloads_embedded_page() {
        let mut preview = OverlayPreview::new();
        preview.set_source(Some("https://a.test/"));
        preview.set_visible(true);
        assert_eq!(preview.pane.target(), Some("https://a.test/"));
        assert!(preview.pane.is_visible());

        preview.set_visible(false);
        preview.set_source(None);
        assert_eq!(preview.pane.target(), None);
        assert!(!preview.pane.is_visible());
    }
}
