// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Tunable layout and matching constants.
//!
//! Values come from the `settings` table of the site file (every key is
//! optional) and can be overridden from the environment for a single run.

use serde::Deserialize;

/// How the works are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationPolicy {
    /// Stacked below the width threshold, overlay above it.
    #[default]
    Auto,
    /// Always the single slot-matched overlay.
    Overlay,
    /// Always the stacked list.
    Stacked,
}

impl std::str::FromStr for PresentationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "overlay" => Ok(Self::Overlay),
            "stacked" => Ok(Self::Stacked),
            other => Err(format!("unknown presentation {other:?}")),
        }
    }
}

/// Inclusive range of star glyph sizes, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StarSize {
    pub min: u32,
    pub max: u32,
}

impl Default for StarSize {
    fn default() -> Self {
        Self { min: 18, max: 34 }
    }
}

/// Layout and matching settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Per-axis slack, in pixels, for matching the viewport to a slot
    pub tolerance: u32,
    /// Extra margin added to the canvas past the furthest star or caption
    pub padding: u32,
    /// Widths at or below this use the stacked presentation
    pub mobile_width_threshold: u32,
    pub star_size: StarSize,
    pub presentation: PresentationPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tolerance: 16,
            padding: 60,
            mobile_width_threshold: 560,
            star_size: StarSize::default(),
            presentation: PresentationPolicy::Auto,
        }
    }
}

impl Settings {
    /// Apply `STARMAP_*` environment overrides.
    ///
    /// Unparsable values are logged and ignored.
    pub fn merge_with_env(&mut self) {
        self.merge_with(|key| std::env::var(key).ok());
    }

    fn merge_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        fn parse_into<T: std::str::FromStr>(key: &str, raw: Option<String>, target: &mut T) {
            if let Some(raw) = raw {
                match raw.trim().parse::<T>() {
                    Ok(value) => *target = value,
                    Err(_) => log::warn!("Ignoring {}={:?}: not a valid value", key, raw),
                }
            }
        }

        parse_into("STARMAP_TOLERANCE", lookup("STARMAP_TOLERANCE"), &mut self.tolerance);
        parse_into("STARMAP_PADDING", lookup("STARMAP_PADDING"), &mut self.padding);
        parse_into(
            "STARMAP_MOBILE_WIDTH",
            lookup("STARMAP_MOBILE_WIDTH"),
            &mut self.mobile_width_threshold,
        );
        parse_into(
            "STARMAP_PRESENTATION",
            lookup("STARMAP_PRESENTATION"),
            &mut self.presentation,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.tolerance, 16);
        assert_eq!(settings.padding, 60);
        assert_eq!(settings.mobile_width_threshold, 560);
        assert_eq!(settings.star_size, StarSize { min: 18, max: 34 });
        assert_eq!(settings.presentation, PresentationPolicy::Auto);
    }

    #[test]
    fn test_partial_table_keeps_defaults() {
        let settings: Settings = serde_yaml::from_str("tolerance: 8\npresentation: stacked\n").unwrap();
        assert_eq!(settings.tolerance, 8);
        assert_eq!(settings.padding, 60);
        assert_eq!(settings.presentation, PresentationPolicy::Stacked);
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("STARMAP_TOLERANCE", "4"),
            ("STARMAP_PADDING", "not-a-number"),
            ("STARMAP_PRESENTATION", "Overlay"),
        ]
        .into_iter()
        .collect();

        let mut settings = Settings::default();
        settings.merge_with(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(settings.tolerance, 4);
        assert_eq!(settings.padding, 60);
        assert_eq!(settings.mobile_width_threshold, 560);
        assert_eq!(settings.presentation, PresentationPolicy::Overlay);
    }
}
