// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Presentation mode reconciliation.
//!
//! Wide windows get the overlay, a single preview driven by slot matching.
//! Narrow windows get the stacked list, every work shown at once. Only one
//! of them is live: entering the stacked list hides and unloads the overlay.

use super::preview::{PreviewController, PreviewSurface};
use super::viewport::ViewportSample;
use crate::models::project::Registry;
use crate::models::settings::{PresentationPolicy, Settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationMode {
    Overlay,
    Stacked,
}

/// Stacked at or below `threshold`, overlay above it.
pub fn classify(width: u32, threshold: u32) -> PresentationMode {
    if width <= threshold {
        PresentationMode::Stacked
    } else {
        PresentationMode::Overlay
    }
}

/// Mode for `sample` under the configured policy.
pub fn mode_for(sample: ViewportSample, settings: &Settings) -> PresentationMode {
    match settings.presentation {
        PresentationPolicy::Auto => classify(sample.w, settings.mobile_width_threshold),
        PresentationPolicy::Overlay => PresentationMode::Overlay,
        PresentationPolicy::Stacked => PresentationMode::Stacked,
    }
}

/// Remembers the last mode so transitions can be acted on and logged.
#[derive(Debug, Default)]
pub struct ModeReconciler {
    mode: Option<PresentationMode>,
}

impl ModeReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mode applied by the last reconcile, if any.
    pub fn mode(&self) -> Option<PresentationMode> {
        self.mode
    }

    /// Make `mode` the live presentation.
    ///
    /// Stacked suppresses the overlay; overlay re-runs slot matching against
    /// `sample`.
    pub fn reconcile<S: PreviewSurface>(
        &mut self,
        mode: PresentationMode,
        sample: ViewportSample,
        registry: &Registry,
        settings: &Settings,
        preview: &mut PreviewController<S>,
    ) -> PresentationMode {
        if self.mode != Some(mode) {
            match self.mode {
                Some(previous) => log::info!(
                    "Presentation {:?} -> {:?} at {}x{}",
                    previous,
                    mode,
                    sample.w,
                    sample.h
                ),
                None => log::info!("Presentation {:?} at {}x{}", mode, sample.w, sample.h),
            }
            self.mode = Some(mode);
        }

        match mode {
            PresentationMode::Stacked => {
                if preview.suppress() {
                    log::debug!("Overlay suppressed by stacked presentation");
                }
            }
            PresentationMode::Overlay => {
                preview.match_preview(sample, registry, settings.tolerance);
            }
        }
        mode
    }

    /// One full recheck: classify `sample` and reconcile.
    pub fn recheck<S: PreviewSurface>(
        &mut self,
        sample: ViewportSample,
        registry: &Registry,
        settings: &Settings,
        preview: &mut PreviewController<S>,
    ) -> PresentationMode {
        log::debug!("Recheck at {}x{}", sample.w, sample.h);
        let mode = mode_for(sample, settings);
        self.reconcile(mode, sample, registry, settings, preview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::tests::raw;
    use crate::sky::preview::tests::RecordingPreview;
    use crate::util::geometry::Size;

    fn narrow_slot_registry() -> Registry {
        Registry::from_raw(vec![
            raw("phone", "https://phone.test/", 400, 800),
            raw("desk", "https://desk.test/", 1021, 434),
        ])
        .unwrap()
    }

    #[test]
    fn test_classify_threshold_is_inclusive() {
        assert_eq!(classify(560, 560), PresentationMode::Stacked);
        assert_eq!(classify(561, 560), PresentationMode::Overlay);
        assert_eq!(classify(0, 560), PresentationMode::Stacked);
    }

    #[test]
    fn test_stacked_never_shows_overlay() {
        let registry = narrow_slot_registry();
        let settings = Settings::default();
        let mut preview = PreviewController::new(RecordingPreview::default());
        let mut reconciler = ModeReconciler::new();

        // The "phone" slot matches exactly, but the width is below the cutoff.
        let mode = reconciler.recheck(Size::new(400, 800), &registry, &settings, &mut preview);
        assert_eq!(mode, PresentationMode::Stacked);
        assert!(!preview.surface().visible);
        assert_eq!(preview.surface().source, None);
    }

    #[test]
    fn test_overlay_to_stacked_unloads_preview() {
        let registry = narrow_slot_registry();
        let settings = Settings::default();
        let mut preview = PreviewController::new(RecordingPreview::default());
        let mut reconciler = ModeReconciler::new();

        reconciler.recheck(Size::new(1021, 434), &registry, &settings, &mut preview);
        assert!(preview.surface().visible);
        assert_eq!(reconciler.mode(), Some(PresentationMode::Overlay));

        reconciler.recheck(Size::new(500, 434), &registry, &settings, &mut preview);
        assert_eq!(reconciler.mode(), Some(PresentationMode::Stacked));
        assert!(!preview.surface().visible);
        assert_eq!(preview.surface().source, None);
        assert_eq!(preview.surface().link, None);

        // Back above the cutoff, matching resumes.
        reconciler.recheck(Size::new(1030, 440), &registry, &settings, &mut preview);
        assert_eq!(reconciler.mode(), Some(PresentationMode::Overlay));
        assert_eq!(preview.surface().source.as_deref(), Some("https://desk.test/"));
    }

    #[test]
    fn test_overlay_matches_like_plain_matcher() {
        let registry = narrow_slot_registry();
        let settings = Settings::default();
        let mut reconciled = PreviewController::new(RecordingPreview::default());
        let mut plain = PreviewController::new(RecordingPreview::default());
        let mut reconciler = ModeReconciler::new();

        for sample in [Size::new(1021, 434), Size::new(900, 900), Size::new(1010, 445)] {
            reconciler.recheck(sample, &registry, &settings, &mut reconciled);
            plain.match_preview(sample, &registry, settings.tolerance);
            assert_eq!(reconciled.state(), plain.state());
            assert_eq!(reconciled.surface().outputs(), plain.surface().outputs());
        }
    }

    #[test]
    fn test_forced_policies() {
        let registry = narrow_slot_registry();
        let mut preview = PreviewController::new(RecordingPreview::default());
        let mut reconciler = ModeReconciler::new();

        let overlay = Settings {
            presentation: PresentationPolicy::Overlay,
            ..Settings::default()
        };
        let mode = reconciler.recheck(Size::new(400, 800), &registry, &overlay, &mut preview);
        assert_eq!(mode, PresentationMode::Overlay);
        assert_eq!(preview.surface().source.as_deref(), Some("https://phone.test/"));

        let stacked = Settings {
            presentation: PresentationPolicy::Stacked,
            ..Settings::default()
        };
        let mode = reconciler.recheck(Size::new(1021, 434), &registry, &stacked, &mut preview);
        assert_eq!(mode, PresentationMode::Stacked);
        assert!(!preview.surface().visible);
    }

    #[test]
    fn test_end_to_end() {
        use crate::models::site::TextAnchor;
        use crate::sky::canvas::{canvas_bounds, CanvasBounds};
        use crate::util::geometry::Point;

        let registry = Registry::from_raw(vec![raw("a", "https://example.test/a", 1021, 434)]).unwrap();
        let anchors = [
            TextAnchor::new("title", "t", Point::new(620, 110)),
            TextAnchor::new("subtitle", "s", Point::new(820, 150)),
        ];
        let settings = Settings::default();
        assert_eq!(
            canvas_bounds(&registry, &anchors, settings.padding),
            CanvasBounds { width: 1081, height: 494 }
        );

        let mut preview = PreviewController::new(RecordingPreview::default());
        let mut reconciler = ModeReconciler::new();

        reconciler.recheck(Size::new(1025, 430), &registry, &settings, &mut preview);
        assert!(preview.surface().visible);
        assert_eq!(preview.surface().source.as_deref(), Some("https://example.test/a"));

        reconciler.recheck(Size::new(1200, 900), &registry, &settings, &mut preview);
        assert!(!preview.surface().visible);
        assert_eq!(preview.surface().source, None);
    }
}
