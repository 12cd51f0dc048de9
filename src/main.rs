// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! starmap - a fixed-canvas landing page for student works
//!
//! Stars sit at fixed pixel positions on the sky. Resizing the window to a
//! work's slot size reveals a preview of that work; narrow windows list
//! every work instead.
//!
//! Usage: `starmap [SITE_FILE]` (or `STARMAP_SITE=...`). Without a site file
//! the built-in site is shown.

mod app;
mod error;
mod io;
mod models;
mod sky;
mod ui;
mod util;

use anyhow::Result;
use app::StarmapApp;
use std::path::PathBuf;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let site_path = std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os("STARMAP_SITE"))
        .map(PathBuf::from);

    // A broken site file is a configuration error: refuse to start.
    let mut site = match &site_path {
        Some(path) => io::serialization::load_site(path)?,
        None => io::serialization::default_site()?,
    };
    site.settings.merge_with_env();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([320.0, 240.0])
            .with_title("starmap"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "starmap",
        options,
        Box::new(move |_cc| Ok(Box::new(StarmapApp::new(site, site_path)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
