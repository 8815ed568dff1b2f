// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Manifest and cluster report serialization.
//!
//! The manifest is always JSON. Cluster reports are written as YAML or JSON
//! depending on the output file extension.

use crate::color::cluster::ClusterReport;
use crate::error::{CatalogError, Result};
use crate::models::catalog::Catalog;
use std::path::Path;

/// Export the catalog as a pretty-printed JSON array.
pub fn export_json(catalog: &Catalog, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog)?;
    std::fs::write(path, json).map_err(|e| CatalogError::file_system(path, e))?;
    Ok(())
}

/// Import a catalog previously written by [`export_json`].
pub fn import_json(path: &Path) -> Result<Catalog> {
    let json = std::fs::read_to_string(path).map_err(|e| CatalogError::file_system(path, e))?;
    let catalog = serde_json::from_str(&json)?;
    Ok(catalog)
}

/// Export a cluster report, YAML for `.yaml`/`.yml` and JSON otherwise.
pub fn export_report(report: &ClusterReport, path: &Path) -> Result<()> {
    let text = match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::to_string(report)?,
        _ => serde_json::to_string_pretty(report)?,
    };
    std::fs::write(path, text).map_err(|e| CatalogError::file_system(path, e))?;
    Ok(())
}
