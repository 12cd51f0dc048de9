// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The sky: stars and captions at fixed pixel positions.
//!
//! The canvas is drawn at its design size with no scaling. If the window is
//! smaller than the canvas, the sky scrolls.

use crate::models::site::TextAnchor;
use crate::sky::canvas::{CanvasBounds, CanvasSurface, Marker};

/// Result of canvas interaction.
pub enum CanvasAction {
    None,
    /// A star was activated.
    OpenWork(String),
}

/// Retained canvas content, filled by the canvas builder.
#[derive(Debug, Default)]
pub struct SkyCanvas {
    bounds: CanvasBounds,
    captions: Vec<TextAnchor>,
    markers: Vec<Marker>,
}

impl SkyCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bounds(&self) -> CanvasBounds {
        self.bounds
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }
}

impl CanvasSurface for SkyCanvas {
    fn set_size(&mut self, bounds: CanvasBounds) {
        self.bounds = bounds;
    }

    fn clear_captions(&mut self) {
        self.captions.clear();
    }

    fn place_caption(&mut self, anchor: &TextAnchor) {
        match self.captions.iter_mut().find(|c| c.key == anchor.key) {
            Some(existing) => *existing = anchor.clone(),
            None => self.captions.push(anchor.clone()),
        }
    }

    fn clear_markers(&mut self) {
        self.markers.clear();
    }

    fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }
}

fn caption_font(key: &str) -> egui::FontId {
    match key {
        "title" => egui::FontId::proportional(40.0),
        "subtitle" => egui::FontId::proportional(20.0),
        _ => egui::FontId::proportional(14.0),
    }
}

/// Display the sky and handle star activation.
pub fn show(ui: &mut egui::Ui, canvas: &SkyCanvas) -> CanvasAction {
    let mut action = CanvasAction::None;
    let bounds = canvas.bounds();
    let size = egui::vec2(bounds.width as f32, bounds.height as f32);

    egui::ScrollArea::both().auto_shrink([false, false]).show(ui, |ui| {
        let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(8, 10, 24));

        for caption in &canvas.captions {
            let pos = rect.min + egui::vec2(caption.position.x as f32, caption.position.y as f32);
            painter.text(
                pos,
                egui::Align2::LEFT_TOP,
                &caption.text,
                caption_font(&caption.key),
                egui::Color32::from_gray(220),
            );
        }

        for (i, marker) in canvas.markers().iter().enumerate() {
            let center = rect.min + egui::vec2(marker.position.x as f32, marker.position.y as f32);
            let extent = marker.size as f32;
            let hit = egui::Rect::from_center_size(center, egui::vec2(extent, extent));

            let response = ui
                .interact(hit, ui.id().with(("star", i)), egui::Sense::click())
                .on_hover_text(marker.label.as_str())
                .on_hover_cursor(egui::CursorIcon::PointingHand);

            let color = if response.hovered() {
                egui::Color32::from_rgb(255, 236, 160)
            } else {
                egui::Color32::WHITE
            };
            draw_star(&painter, center, extent / 2.0, color);

            if response.clicked() {
                action = CanvasAction::OpenWork(marker.url.clone());
            }
        }
    });

    action
}

/// Draw an eight-ray star.
fn draw_star(painter: &egui::Painter, center: egui::Pos2, radius: f32, color: egui::Color32) {
    let stroke = egui::Stroke::new((radius / 8.0).max(1.0), color);
    for k in 0..8 {
        let angle = k as f32 * std::f32::consts::FRAC_PI_4;
        let reach = if k % 2 == 0 { radius } else { radius * 0.6 };
        let tip = center + egui::vec2(angle.cos(), angle.sin()) * reach;
        painter.line_segment([center, tip], stroke);
    }
    painter.circle_filled(center, radius / 5.0, color);
}
