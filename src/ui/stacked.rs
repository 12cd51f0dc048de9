// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Stacked list for narrow windows: one card per work, all shown at once.

use super::webview::WebPane;
use crate::models::project::Registry;

/// Embedded pages for the stacked cards, one per work.
///
/// Native views are not clipped by egui, so a card's view is only shown
/// while the whole card is inside the scroll area.
#[derive(Default)]
pub struct StackedList {
    panes: Vec<WebPane>,
}

impl StackedList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every embedded page. Called when leaving the stacked mode.
    pub fn release(&mut self) {
        if !self.panes.is_empty() {
            log::debug!("Releasing {} stacked previews", self.panes.len());
        }
        self.panes.clear();
    }

    /// Match the panes to the registry and point each at its work.
    fn sync(&mut self, registry: &Registry) {
        self.panes.resize_with(registry.len(), WebPane::new);
        for (pane, entry) in self.panes.iter_mut().zip(registry.iter()) {
            pane.navigate(Some(&entry.url));
        }
    }
}

/// Display every work as a labelled card. Returns the URL of a clicked card.
pub fn show(
    ui: &mut egui::Ui,
    frame: &eframe::Frame,
    list: &mut StackedList,
    registry: &Registry,
) -> Option<String> {
    let mut opened = None;
    list.sync(registry);
    let pixels_per_point = ui.ctx().pixels_per_point();

    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        for (index, (entry, pane)) in registry.iter().zip(list.panes.iter_mut()).enumerate() {
            let label = entry.label();
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&label).strong());
                    if ui.small_button("open ↗").on_hover_text(entry.url.as_str()).clicked() {
                        opened = Some(entry.url.clone());
                    }
                });

                let height = (ui.available_width() * 0.6).max(120.0);
                let (rect, response) = ui.allocate_exact_size(
                    egui::vec2(ui.available_width(), height),
                    egui::Sense::click(),
                );

                let shown = ui.clip_rect().contains_rect(rect);
                pane.set_visible(shown);
                if shown {
                    pane.place(frame, rect, pixels_per_point);
                }

                if !pane.is_embedded() {
                    let painter = ui.painter_at(rect);
                    painter.rect_filled(rect, 4.0, egui::Color32::from_gray(24));
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        &entry.url,
                        egui::FontId::monospace(11.0),
                        egui::Color32::from_gray(170),
                    );

                    let response = response
                        .on_hover_text(format!("open {label} in a new tab"))
                        .on_hover_cursor(egui::CursorIcon::PointingHand);
                    if response.clicked() {
                        opened = Some(entry.url.clone());
                    }
                }
            });
            if index + 1 < registry.len() {
                ui.add_space(12.0);
            }
        }
    });

    opened
}
