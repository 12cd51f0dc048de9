// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the starmap application.

pub mod canvas;
pub mod preview;
pub mod stacked;
pub mod toolbar;
pub mod webview;

/// Open `url` in a new browser tab, with no link back to this window.
pub fn open_external(ctx: &egui::Context, url: &str) {
    log::info!("Opening {}", url);
    ctx.open_url(egui::OpenUrl::new_tab(url));
}
