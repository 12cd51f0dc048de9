// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project registry.
//!
//! The registry is the ordered, read-only table of student works shown on
//! the sky. Entries only exist after validation, so the rest of the
//! application never has to deal with a missing URL or a negative
//! coordinate.

use crate::error::RegistryError;
use crate::util::geometry::{Point, Size};
use serde::Deserialize;

/// One student work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    /// Attribution label (the student).
    pub name: String,
    /// Work title.
    pub title: String,
    /// Absolute http(s) URL of the work.
    pub url: String,
    /// Star position on the canvas.
    pub position: Point,
    /// Viewport size that triggers the preview.
    pub slot: Size,
}

impl ProjectEntry {
    /// Display label, `"{name} — {title}"`.
    pub fn label(&self) -> String {
        format!("{} — {}", self.name, self.title)
    }
}

/// Raw x/y as written in a site file, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RawPoint {
    pub x: i64,
    pub y: i64,
}

/// Raw w/h as written in a site file, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RawSize {
    pub w: i64,
    pub h: i64,
}

/// A project entry as written in a site file, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawProjectEntry {
    pub name: String,
    #[serde(alias = "work")]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(alias = "pos")]
    pub position: RawPoint,
    #[serde(alias = "trigger_slot")]
    pub slot: RawSize,
}

impl RawProjectEntry {
    /// Validate this entry, `index` being its position in the registry.
    pub fn validate(self, index: usize) -> Result<ProjectEntry, RegistryError> {
        let url = self.url.trim().to_string();
        if url.is_empty() {
            return Err(RegistryError::EmptyUrl {
                index,
                name: self.name,
            });
        }

        let parsed = match url::Url::parse(&url) {
            Ok(parsed) => parsed,
            Err(e) => {
                return Err(RegistryError::MalformedUrl {
                    index,
                    name: self.name,
                    url,
                    reason: e.to_string(),
                })
            }
        };
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(RegistryError::UnsupportedScheme {
                index,
                name: self.name,
                scheme: parsed.scheme().to_string(),
            });
        }

        let coord = |field: &'static str, value: i64| -> Result<u32, RegistryError> {
            if value < 0 {
                return Err(RegistryError::NegativeCoordinate {
                    index,
                    name: self.name.clone(),
                    field,
                    value,
                });
            }
            u32::try_from(value).map_err(|_| RegistryError::CoordinateOverflow {
                index,
                name: self.name.clone(),
                field,
                value,
            })
        };

        let position = Point::new(coord("position.x", self.position.x)?, coord("position.y", self.position.y)?);
        let slot = Size::new(coord("slot.w", self.slot.w)?, coord("slot.h", self.slot.h)?);

        Ok(ProjectEntry {
            name: self.name,
            title: self.title,
            url,
            position,
            slot,
        })
    }
}

/// Ordered, immutable sequence of validated project entries.
///
/// Order is significant only as the tie-break when two slots are close
/// enough for one viewport to match both: the earlier entry wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<RawProjectEntry>")]
pub struct Registry {
    entries: Vec<ProjectEntry>,
}

impl Registry {
    /// Validate raw entries in order, failing on the first bad one.
    pub fn from_raw(raw: Vec<RawProjectEntry>) -> Result<Self, RegistryError> {
        let entries = raw
            .into_iter()
            .enumerate()
            .map(|(index, entry)| entry.validate(index))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[ProjectEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&ProjectEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectEntry> {
        self.entries.iter()
    }

    /// Pairs of entries whose slots are within `2 * tolerance` on both axes.
    ///
    /// Some viewport matches both entries of such a pair, and the earlier
    /// one always wins.
    pub fn ambiguous_slots(&self, tolerance: u32) -> Vec<(usize, usize)> {
        let reach = tolerance.saturating_mul(2);
        let mut pairs = Vec::new();
        for (i, a) in self.entries.iter().enumerate() {
            for (j, b) in self.entries.iter().enumerate().skip(i + 1) {
                if crate::util::geometry::within_tolerance(a.slot, b.slot, reach) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }
}

impl TryFrom<Vec<RawProjectEntry>> for Registry {
    type Error = RegistryError;

    fn try_from(raw: Vec<RawProjectEntry>) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a ProjectEntry;
    type IntoIter = std::slice::Iter<'a, ProjectEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
