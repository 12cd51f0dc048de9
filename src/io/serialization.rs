// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Site file loading.
//!
//! Site files are YAML or JSON, chosen by extension. A default site is
//! compiled into the binary so the application runs without arguments.

use crate::models::site::SiteData;
use anyhow::{bail, Context, Result};
use std::path::Path;

const DEFAULT_SITE: &str = include_str!("../../assets/site.yaml");

/// The built-in site.
pub fn default_site() -> Result<SiteData> {
    parse_yaml(DEFAULT_SITE).context("Built-in site is invalid")
}

/// Parse site data from YAML text.
pub fn parse_yaml(text: &str) -> Result<SiteData> {
    let data = serde_yaml::from_str(text)?;
    Ok(data)
}

/// Parse site data from JSON text.
pub fn parse_json(text: &str) -> Result<SiteData> {
    let data = serde_json::from_str(text)?;
    Ok(data)
}

/// Import site data from a YAML file.
pub fn import_yaml(path: &Path) -> Result<SiteData> {
    let yaml = std::fs::read_to_string(path)?;
    parse_yaml(&yaml)
}

/// Import site data from a JSON file.
pub fn import_json(path: &Path) -> Result<SiteData> {
    let json = std::fs::read_to_string(path)?;
    parse_json(&json)
}

/// Load a site file, picking the format from its extension.
pub fn load_site(path: &Path) -> Result<SiteData> {
    let extension = path.extension().and_then(|s| s.to_str());
    let data = match extension {
        Some("yaml") | Some("yml") => import_yaml(path),
        Some("json") => import_json(path),
        _ => bail!("Unsupported site file extension: {:?}", extension),
    }
    .with_context(|| format!("Failed to load site from {}", path.display()))?;

    log::info!(
        "Loaded site from {}: {} projects, {} captions",
        path.display(),
        data.projects.len(),
        data.text.len()
    );
    Ok(data)
}
