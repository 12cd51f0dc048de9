// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Viewport sampling.

use crate::util::geometry::{round_px, Size};

/// Current effective viewport, in whole pixels.
pub type ViewportSample = Size;

/// Something that can report how big the visible area is.
pub trait ViewportSource {
    /// The area actually visible to the user (after zoom, on-screen
    /// keyboards, window chrome), if the platform reports one.
    fn visual_viewport(&self) -> Option<(f32, f32)>;

    /// The layout area of the page. Always available.
    fn client_size(&self) -> (f32, f32);
}

/// Read the viewport, preferring the visual viewport and falling back to
/// the client size. Not cached: every call measures again.
pub fn sample_viewport<V: ViewportSource + ?Sized>(source: &V) -> ViewportSample {
    let (w, h) = source.visual_viewport().unwrap_or_else(|| source.client_size());
    Size::new(round_px(w), round_px(h))
}
