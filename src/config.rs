// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Run configuration.
//!
//! Every field has a default matching the original flag directory layout, so
//! an empty file (or no file at all) reproduces the standard manifest.
//! Configuration files are YAML when named `.yaml`/`.yml` and JSON otherwise:
//!
//! ```yaml
//! image_dir: state_flags_png
//! thumbnail_dir: state_flags_thumbnails/
//! output: state_colors.json
//! extensions: [png]
//! clustering:
//!   k: 4
//!   iterations: 20
//!   seed: 7
//!   output: state_clusters.json
//! ```

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_IMAGE_DIR: &str = "state_flags_png/";
pub const DEFAULT_THUMBNAIL_DIR: &str = "state_flags_thumbnails/";
pub const DEFAULT_OUTPUT: &str = "state_colors.json";
pub const DEFAULT_CLUSTER_OUTPUT: &str = "state_clusters.json";

/// Settings for building the color manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding the source flag images.
    pub image_dir: PathBuf,
    /// Prefix for thumbnail paths; not read from disk.
    pub thumbnail_dir: String,
    /// Manifest output path.
    pub output: PathBuf,
    /// Image file extensions to include, compared case-insensitively.
    pub extensions: Vec<String>,
    pub clustering: ClusterConfig,
}

/// K-means settings for grouping manifest colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClusterConfig {
    pub k: usize,
    pub iterations: usize,
    /// Fixed RNG seed; random centroids differ on every run without one.
    pub seed: Option<u64>,
    /// Cluster report output path.
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_dir: PathBuf::from(DEFAULT_IMAGE_DIR),
            thumbnail_dir: DEFAULT_THUMBNAIL_DIR.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            extensions: vec!["png".to_string()],
            clustering: ClusterConfig::default(),
        }
    }
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            k: 4,
            iterations: 20,
            seed: None,
            output: PathBuf::from(DEFAULT_CLUSTER_OUTPUT),
        }
    }
}

impl Config {
    /// Load configuration from a YAML or JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text =
            std::fs::read_to_string(path).map_err(|e| CatalogError::file_system(path, e))?;

        let config: Config = match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&text)?,
            _ => serde_json::from_str(&text)?,
        };

        log::debug!("Loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Reject settings that cannot produce a meaningful run.
    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(CatalogError::invalid_config(
                "at least one image extension is required",
            ));
        }
        if let Some(ext) = self.extensions.iter().find(|e| e.is_empty() || e.starts_with('.')) {
            return Err(CatalogError::invalid_config(format!(
                "extension {:?} must be non-empty and given without a leading dot",
                ext
            )));
        }
        self.clustering.validate()
    }
}

impl ClusterConfig {
    /// Reject k-means settings that cannot run.
    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(CatalogError::invalid_config("cluster count k must be at least 1"));
        }
        if self.iterations == 0 {
            return Err(CatalogError::invalid_config(
                "k-means needs at least one iteration",
            ));
        }
        Ok(())
    }
}
