// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Layout and viewport logic for the sky, independent of any UI toolkit.
//!
//! The shell supplies surfaces ([`canvas::CanvasSurface`],
//! [`preview::PreviewSurface`]) and a [`viewport::ViewportSource`], and
//! calls [`mode::ModeReconciler::recheck`] whenever the viewport changes.

pub mod canvas;
pub mod mode;
pub mod preview;
pub mod viewport;
