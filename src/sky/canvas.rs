// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Fixed design-space canvas.
//!
//! The canvas is sized once to contain every star and caption plus a
//! margin. It is never scaled to the window; when the window is smaller the
//! shell scrolls.

use crate::models::project::Registry;
use crate::models::settings::StarSize;
use crate::models::site::TextAnchor;
use crate::util::geometry::{max_extent, Point};
use rand::Rng;

/// Canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CanvasBounds {
    pub width: u32,
    pub height: u32,
}

/// A star placed on the canvas for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub position: Point,
    /// Glyph size in pixels.
    pub size: u32,
    /// `"{name} — {title}"`, also the hover/accessible text.
    pub label: String,
    /// Opened in a new browsing context when the star is activated.
    pub url: String,
}

/// Whatever draws the canvas.
pub trait CanvasSurface {
    fn set_size(&mut self, bounds: CanvasBounds);
    /// Remove every caption.
    fn clear_captions(&mut self);
    /// Place a caption; placing the same key again moves it.
    fn place_caption(&mut self, anchor: &TextAnchor);
    fn clear_markers(&mut self);
    fn add_marker(&mut self, marker: Marker);
}

/// Bounds of the canvas for the given stars and captions.
pub fn canvas_bounds(registry: &Registry, anchors: &[TextAnchor], padding: u32) -> CanvasBounds {
    let points = registry
        .iter()
        .map(|e| e.position)
        .chain(anchors.iter().map(|a| a.position));
    let max = max_extent(points);

    CanvasBounds {
        width: max.x.saturating_add(padding),
        height: max.y.saturating_add(padding),
    }
}

/// Size the canvas, place the captions and (re)create the stars.
///
/// Existing captions and markers are cleared first, so calling this again
/// leaves exactly the given captions and stars.
pub fn build_canvas<S, R>(
    registry: &Registry,
    anchors: &[TextAnchor],
    padding: u32,
    star_size: StarSize,
    rng: &mut R,
    surface: &mut S,
) -> CanvasBounds
where
    S: CanvasSurface + ?Sized,
    R: Rng,
{
    let bounds = canvas_bounds(registry, anchors, padding);
    surface.set_size(bounds);

    surface.clear_captions();
    for anchor in anchors {
        surface.place_caption(anchor);
    }

    let (lo, hi) = if star_size.min <= star_size.max {
        (star_size.min, star_size.max)
    } else {
        (star_size.max, star_size.min)
    };

    surface.clear_markers();
    for entry in registry {
        surface.add_marker(Marker {
            position: entry.position,
            size: rng.gen_range(lo..=hi),
            label: entry.label(),
            url: entry.url.clone(),
        });
    }

    log::info!(
        "Built canvas {}x{} with {} stars and {} captions",
        bounds.width,
        bounds.height,
        registry.len(),
        anchors.len()
    );
    bounds
}
