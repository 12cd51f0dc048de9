// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Site data: everything the sky is built from.
//!
//! The registry, the fixed captions and the settings are data, not code, so
//! a different cohort of works can be shown without touching the layout or
//! matching logic.

use super::project::Registry;
use super::settings::Settings;
use crate::util::geometry::Point;
use serde::Deserialize;

/// A fixed caption on the canvas (title, subtitle, hint, year...).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TextAnchor {
    pub key: String,
    #[serde(default)]
    pub text: String,
    #[serde(alias = "pos")]
    pub position: Point,
}

#[cfg(test)]
impl TextAnchor {
    pub fn new(key: &str, text: &str, position: Point) -> Self {
        Self {
            key: key.to_string(),
            text: text.to_string(),
            position,
        }
    }
}

/// Complete site description, as loaded from a site file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SiteData {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub text: Vec<TextAnchor>,
    #[serde(default)]
    pub projects: Registry,
}
