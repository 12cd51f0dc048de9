// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Slot matching and the preview overlay.
//!
//! Every project has a slot: a window size that reveals it. When the sampled
//! viewport is within the tolerance of a slot on both axes, the overlay
//! shows that project. The first matching project in registry order wins.
//!
//! The overlay never stays hidden with a source set: every path that hides
//! it also clears its source, link and caption, so nothing keeps loading in
//! the background.

use super::viewport::ViewportSample;
use crate::models::project::{ProjectEntry, Registry};
use crate::util::geometry::within_tolerance;

/// The overlay's outputs.
pub trait PreviewSurface {
    /// Embedded content source; `None` unloads it.
    fn set_source(&mut self, url: Option<&str>);
    /// Click-through target covering the preview; `None` disables it.
    fn set_link(&mut self, url: Option<&str>);
    fn set_caption(&mut self, text: &str);
    fn set_visible(&mut self, visible: bool);
}

/// What the overlay is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreviewState {
    pub visible: bool,
    /// Registry index of the project being previewed.
    pub active: Option<usize>,
}

/// First project, in registry order, whose slot is within `tolerance` of
/// `sample` on both axes.
pub fn find_match<'a>(
    sample: ViewportSample,
    registry: &'a Registry,
    tolerance: u32,
) -> Option<(usize, &'a ProjectEntry)> {
    registry
        .iter()
        .enumerate()
        .find(|(_, entry)| within_tolerance(sample, entry.slot, tolerance))
}

/// Owns the overlay surface and the single [`PreviewState`].
pub struct PreviewController<S> {
    surface: S,
    state: PreviewState,
}

impl<S: PreviewSurface> PreviewController<S> {
    /// Take over `surface`, starting hidden and empty.
    pub fn new(surface: S) -> Self {
        let mut controller = Self {
            surface,
            state: PreviewState::default(),
        };
        controller.reset();
        controller
    }

    pub fn state(&self) -> PreviewState {
        self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for placing the surface on screen. Preview outputs
    /// must still go through the controller.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Show the project matching `sample`, or hide the overlay if none does.
    ///
    /// Writes nothing to the surface when the outcome is unchanged, so it can
    /// run on every viewport event.
    pub fn match_preview(
        &mut self,
        sample: ViewportSample,
        registry: &Registry,
        tolerance: u32,
    ) -> Option<usize> {
        let found = find_match(sample, registry, tolerance);
        self.apply(found);
        self.state.active
    }

    /// Close control: hide and unload until the viewport changes again.
    pub fn dismiss(&mut self) {
        if self.state.visible {
            log::info!("Preview dismissed");
        }
        self.apply(None);
    }

    /// Hide and unload because another presentation took over.
    ///
    /// Returns whether the overlay was showing something.
    pub fn suppress(&mut self) -> bool {
        let was_visible = self.state.visible;
        self.apply(None);
        was_visible
    }

    /// Unconditionally clear the surface, e.g. after the registry changed
    /// and the active index no longer means the same project.
    pub fn reset(&mut self) {
        write_hidden(&mut self.surface);
        self.state = PreviewState::default();
    }

    fn apply(&mut self, target: Option<(usize, &ProjectEntry)>) {
        let next = PreviewState {
            visible: target.is_some(),
            active: target.map(|(index, _)| index),
        };
        if next == self.state {
            return;
        }

        match target {
            Some((index, entry)) => {
                self.surface.set_source(Some(&entry.url));
                self.surface.set_link(Some(&entry.url));
                self.surface.set_caption(&entry.label());
                self.surface.set_visible(true);
                log::info!("Previewing #{} {}", index, entry.label());
            }
            None => {
                write_hidden(&mut self.surface);
                log::debug!("Preview hidden");
            }
        }
        self.state = next;
    }
}

fn write_hidden<S: PreviewSurface>(surface: &mut S) {
    surface.set_visible(false);
    surface.set_source(None);
    surface.set_link(None);
    surface.set_caption("");
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::project::tests::raw;
    use crate::util::geometry::Size;

    /// Surface double that keeps the current outputs and counts writes.
    #[derive(Debug, Default, Clone, PartialEq, Eq)]
    pub(crate) struct RecordingPreview {
        pub source: Option<String>,
        pub link: Option<String>,
        pub caption: String,
        pub visible: bool,
        pub writes: usize,
    }

    impl RecordingPreview {
        /// Outputs only, without the write counter.
        pub fn outputs(&self) -> (Option<String>, Option<String>, String, bool) {
            (self.source.clone(), self.link.clone(), self.caption.clone(), self.visible)
        }
    }

    impl PreviewSurface for RecordingPreview {
        fn set_source(&mut self, url: Option<&str>) {
            self.source = url.map(str::to_string);
            self.writes += 1;
        }

        fn set_link(&mut self, url: Option<&str>) {
            self.link = url.map(str::to_string);
            self.writes += 1;
        }

        fn set_caption(&mut self, text: &str) {
            self.caption = text.to_string();
            self.writes += 1;
        }

        fn set_visible(&mut self, visible: bool) {
            self.visible = visible;
            self.writes += 1;
        }
    }

    fn assert_cleared(preview: &RecordingPreview) {
        assert!(!preview.visible);
        assert_eq!(preview.source, None);
        assert_eq!(preview.link, None);
        assert_eq!(preview.caption, "");
    }

    #[test]
    fn test_tolerance_boundary() {
        let registry = Registry::from_raw(vec![raw("a", "https://a.test/", 1021, 434)]).unwrap();

        for (w, h) in [(1021, 434), (1037, 450), (1005, 418)] {
            assert!(find_match(Size::new(w, h), &registry, 16).is_some(), "{w}x{h} should match");
        }
        for (w, h) in [(1038, 434), (1021, 451)] {
            assert!(find_match(Size::new(w, h), &registry, 16).is_none(), "{w}x{h} should not match");
        }
    }

    #[test]
    fn test_first_match_wins() {
        let registry = Registry::from_raw(vec![
            raw("A", "https://a.test/", 800, 600),
            raw("B", "https://b.test/", 800, 600),
        ])
        .unwrap();

        let (index, entry) = find_match(Size::new(800, 600), &registry, 16).unwrap();
        assert_eq!(index, 0);
        assert_eq!(entry.name, "A");
    }

    #[test]
    fn test_empty_registry_never_matches() {
        let mut preview = PreviewController::new(RecordingPreview::default());
        assert_eq!(preview.match_preview(Size::new(0, 0), &Registry::default(), 16), None);
        assert_cleared(preview.surface());
    }

    #[test]
    fn test_no_match_clears_everything() {
        let registry = Registry::from_raw(vec![
            raw("a", "https://a.test/", 1021, 434),
            raw("b", "https://b.test/", 1274, 715),
        ])
        .unwrap();
        let mut preview = PreviewController::new(RecordingPreview::default());

        assert_eq!(preview.match_preview(Size::new(1021, 434), &registry, 16), Some(0));
        let s = preview.surface();
        assert!(s.visible);
        assert_eq!(s.source.as_deref(), Some("https://a.test/"));
        assert_eq!(s.link.as_deref(), Some("https://a.test/"));
        assert_eq!(s.caption, "a — a work");

        assert_eq!(preview.match_preview(Size::new(640, 480), &registry, 16), None);
        assert_cleared(preview.surface());
        assert_eq!(preview.state(), PreviewState::default());

        assert_eq!(preview.match_preview(Size::new(1270, 720), &registry, 16), Some(1));
        assert_eq!(preview.surface().source.as_deref(), Some("https://b.test/"));
        assert_eq!(preview.surface().caption, "b — b work");

        assert_eq!(preview.match_preview(Size::new(2000, 2000), &registry, 16), None);
        assert_cleared(preview.surface());
    }

    #[test]
    fn test_switching_between_matches() {
        let registry = Registry::from_raw(vec![
            raw("a", "https://a.test/", 1021, 434),
            raw("b", "https://b.test/", 1100, 619),
        ])
        .unwrap();
        let mut preview = PreviewController::new(RecordingPreview::default());

        preview.match_preview(Size::new(1021, 434), &registry, 16);
        preview.match_preview(Size::new(1100, 619), &registry, 16);

        assert_eq!(preview.state().active, Some(1));
        assert_eq!(preview.surface().link.as_deref(), Some("https://b.test/"));
    }

    #[test]
    fn test_repeated_sample_is_idempotent() {
        let registry = Registry::from_raw(vec![raw("a", "https://a.test/", 1021, 434)]).unwrap();
        let mut preview = PreviewController::new(RecordingPreview::default());

        for sample in [Size::new(1025, 430), Size::new(300, 300)] {
            preview.match_preview(sample, &registry, 16);
            let state = preview.state();
            let outputs = preview.surface().outputs();
            let writes = preview.surface().writes;

            preview.match_preview(sample, &registry, 16);
            assert_eq!(preview.state(), state);
            assert_eq!(preview.surface().outputs(), outputs);
            assert_eq!(preview.surface().writes, writes);
        }
    }

    #[test]
    fn test_dismiss_clears_until_next_change() {
        let registry = Registry::from_raw(vec![raw("a", "https://a.test/", 1021, 434)]).unwrap();
        let mut preview = PreviewController::new(RecordingPreview::default());

        preview.match_preview(Size::new(1021, 434), &registry, 16);
        preview.dismiss();
        assert_cleared(preview.surface());

        // A later viewport event inside the slot brings it back.
        preview.match_preview(Size::new(1022, 434), &registry, 16);
        assert!(preview.surface().visible);
    }

    #[test]
    fn test_reset_after_registry_swap() {
        let first = Registry::from_raw(vec![raw("a", "https://a.test/", 1021, 434)]).unwrap();
        let second = Registry::from_raw(vec![raw("z", "https://z.test/", 1021, 434)]).unwrap();
        let mut preview = PreviewController::new(RecordingPreview::default());

        preview.match_preview(Size::new(1021, 434), &first, 16);
        preview.reset();
        preview.match_preview(Size::new(1021, 434), &second, 16);

        assert_eq!(preview.surface().source.as_deref(), Some("https://z.test/"));
    }
}
