// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! Integer points and sizes in canvas/viewport space, and the per-axis
//! tolerance comparison used for slot matching.

use serde::Deserialize;

/// A position in canvas space (pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair (pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

impl Size {
    pub const fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }
}

/// Check that `a` and `b` differ by at most `tolerance` on each axis.
///
/// Both bounds are inclusive and the axes are independent (a box, not a
/// circle).
pub fn within_tolerance(a: Size, b: Size, tolerance: u32) -> bool {
    a.w.abs_diff(b.w) <= tolerance && a.h.abs_diff(b.h) <= tolerance
}

/// Largest x and largest y over all points, or the origin when empty.
pub fn max_extent<I>(points: I) -> Point
where
    I: IntoIterator<Item = Point>,
{
    points.into_iter().fold(Point::default(), |acc, p| Point {
        x: acc.x.max(p.x),
        y: acc.y.max(p.y),
    })
}

/// Round a measured length to whole pixels, clamping non-finite and
/// negative values to zero.
pub fn round_px(value: f32) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round().min(u32::MAX as f32) as u32
    } else {
        0
    }
}
