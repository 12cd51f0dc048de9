// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module wires the sky logic to the window: it builds the canvas from
//! the loaded site, samples the window size every frame and runs a recheck
//! whenever the size changed, then draws whichever presentation is live.

use crate::io::serialization;
use crate::models::site::SiteData;
use crate::sky::canvas::build_canvas;
use crate::sky::mode::{ModeReconciler, PresentationMode};
use crate::sky::preview::PreviewController;
use crate::sky::viewport::{sample_viewport, ViewportSample, ViewportSource};
use crate::ui::{self, canvas, preview, stacked, toolbar};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// Window size as seen through egui.
struct EguiViewport<'a> {
    ctx: &'a egui::Context,
}

impl ViewportSource for EguiViewport<'_> {
    fn visual_viewport(&self) -> Option<(f32, f32)> {
        self.ctx
            .input(|i| i.viewport().inner_rect)
            .map(|rect| (rect.width(), rect.height()))
    }

    fn client_size(&self) -> (f32, f32) {
        let rect = self.ctx.screen_rect();
        (rect.width(), rect.height())
    }
}

/// Main application state.
pub struct StarmapApp {
    /// Currently loaded site
    site: SiteData,

    /// File the site came from (`None` for the built-in site)
    site_path: Option<PathBuf>,

    /// Retained sky content
    canvas: canvas::SkyCanvas,

    /// Overlay preview and its state
    preview: PreviewController<preview::OverlayPreview>,

    /// Embedded pages of the stacked list
    stacked: stacked::StackedList,

    /// Overlay/stacked switch
    reconciler: ModeReconciler,

    /// Viewport at the last recheck
    last_sample: Option<ViewportSample>,

    /// Work selector state
    selected_work: Option<usize>,

    /// Source of star sizes
    rng: StdRng,
}

impl StarmapApp {
    /// Create the application for an already loaded site.
    pub fn new(site: SiteData, site_path: Option<PathBuf>) -> Self {
        Self::with_rng(site, site_path, StdRng::from_entropy())
    }

    fn with_rng(site: SiteData, site_path: Option<PathBuf>, rng: StdRng) -> Self {
        let mut app = Self {
            site: SiteData::default(),
            site_path: None,
            canvas: canvas::SkyCanvas::new(),
            preview: PreviewController::new(preview::OverlayPreview::new()),
            stacked: stacked::StackedList::new(),
            reconciler: ModeReconciler::new(),
            last_sample: None,
            selected_work: None,
            rng,
        };
        app.install_site(site, site_path);
        app
    }

    /// Replace the current site and rebuild everything derived from it.
    fn install_site(&mut self, site: SiteData, site_path: Option<PathBuf>) {
        for (a, b) in site.projects.ambiguous_slots(site.settings.tolerance) {
            log::warn!(
                "Slots of #{} and #{} overlap within the tolerance; #{} wins where both match",
                a,
                b,
                a
            );
        }

        self.site = site;
        self.site_path = site_path;
        build_canvas(
            &self.site.projects,
            &self.site.text,
            self.site.settings.padding,
            self.site.settings.star_size,
            &mut self.rng,
            &mut self.canvas,
        );
        self.preview.reset();
        self.stacked.release();
        self.selected_work = None;
        // Force a recheck on the next frame.
        self.last_sample = None;
    }

    /// Load a site file, keeping the current site if it fails.
    fn open_site(&mut self, path: PathBuf) {
        match serialization::load_site(&path) {
            Ok(mut site) => {
                site.settings.merge_with_env();
                self.install_site(site, Some(path));
            }
            Err(e) => log::error!("{:#}", e),
        }
    }

    /// Re-read the current site file (or the built-in site).
    fn reload_site(&mut self) {
        match self.site_path.clone() {
            Some(path) => self.open_site(path),
            None => match serialization::default_site() {
                Ok(mut site) => {
                    site.settings.merge_with_env();
                    self.install_site(site, None);
                }
                Err(e) => log::error!("{:#}", e),
            },
        }
    }

    /// Run a recheck if the viewport differs from the last one.
    fn on_viewport(&mut self, sample: ViewportSample) -> PresentationMode {
        if self.last_sample == Some(sample) {
            return self.reconciler.mode().unwrap_or(PresentationMode::Overlay);
        }
        self.last_sample = Some(sample);
        let mode = self.reconciler.recheck(
            sample,
            &self.site.projects,
            &self.site.settings,
            &mut self.preview,
        );
        if mode == PresentationMode::Overlay {
            self.stacked.release();
        }
        mode
    }

    /// Label of the work the overlay is showing, if any.
    fn previewed_label(&self) -> Option<String> {
        let active = self.preview.state().active?;
        self.site.projects.get(active).map(|entry| entry.label())
    }
}

impl eframe::App for StarmapApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let sample = sample_viewport(&EguiViewport { ctx });
        let mode = self.on_viewport(sample);

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Site...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Site", &["yaml", "yml", "json"])
                            .pick_file()
                        {
                            self.open_site(path);
                        }
                        ui.close_menu();
                    }
                    if ui.button("Reload").clicked() {
                        self.reload_site();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.separator();
                if let Some(url) = toolbar::show(ui, &self.site.projects, &mut self.selected_work) {
                    ui::open_external(ctx, &url);
                }
            });
        });

        // Status line
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{}x{}", sample.w, sample.h));
                ui.separator();
                ui.label(match mode {
                    PresentationMode::Overlay => "overlay",
                    PresentationMode::Stacked => "stacked",
                });
                if let Some(label) = self.previewed_label() {
                    ui.separator();
                    ui.label(label);
                }
                ui.separator();
                ui.label(
                    egui::RichText::new(format!("{} works", self.site.projects.len())).weak(),
                );
            });
        });

        // Main area (center)
        let opened = egui::CentralPanel::default()
            .show(ctx, |ui| match mode {
                PresentationMode::Overlay => match canvas::show(ui, &self.canvas) {
                    canvas::CanvasAction::OpenWork(url) => Some(url),
                    canvas::CanvasAction::None => None,
                },
                PresentationMode::Stacked => {
                    stacked::show(ui, frame, &mut self.stacked, &self.site.projects)
                }
            })
            .inner;
        if let Some(url) = opened {
            ui::open_external(ctx, &url);
        }

        // Preview overlay
        match preview::show(ctx, frame, self.preview.surface_mut()) {
            preview::PreviewAction::Close => self.preview.dismiss(),
            preview::PreviewAction::OpenWork(url) => ui::open_external(ctx, &url),
            preview::PreviewAction::None => {}
        }
    }
}
