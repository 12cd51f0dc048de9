// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types for site data validation.

use thiserror::Error;

/// A project entry that violates the registry contract.
///
/// Every variant names the offending entry by its position in the site file
/// so a broken registry can be fixed without guessing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The entry has no URL.
    #[error("project #{index} ({name}): url is empty")]
    EmptyUrl { index: usize, name: String },

    /// The URL could not be parsed as an absolute URL.
    #[error("project #{index} ({name}): malformed url {url:?}: {reason}")]
    MalformedUrl {
        index: usize,
        name: String,
        url: String,
        reason: String,
    },

    /// The URL parsed but is not something a browser can open in a tab.
    #[error("project #{index} ({name}): unsupported url scheme {scheme:?} (expected http or https)")]
    UnsupportedScheme {
        index: usize,
        name: String,
        scheme: String,
    },

    /// A position or slot coordinate is below zero.
    #[error("project #{index} ({name}): {field} must be non-negative, got {value}")]
    NegativeCoordinate {
        index: usize,
        name: String,
        field: &'static str,
        value: i64,
    },

    /// A position or slot coordinate does not fit in 32 bits.
    #[error("project #{index} ({name}): {field} is too large ({value})")]
    CoordinateOverflow {
        index: usize,
        name: String,
        field: &'static str,
        value: i64,
    },
}
