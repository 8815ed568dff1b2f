// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types for catalog generation.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for flag-colors operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Everything that can abort a catalog run.
///
/// None of these are recovered from: a partial catalog cannot be told apart
/// from a complete one, so the first error ends the run.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The file exists but is not a readable image.
    #[error("failed to decode image {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The image decoded to zero pixels, so there is no mean to take.
    #[error("image {} has no pixels", path.display())]
    EmptyImage { path: PathBuf },

    /// A directory or file could not be read or written.
    #[error("file system error at {}", path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization failed")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration values that cannot produce a meaningful run.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl CatalogError {
    /// Wrap an I/O error together with the path it happened on.
    pub fn file_system(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Wrap a decoder error together with the image path.
    pub fn decode(path: impl AsRef<Path>, source: image::ImageError) -> Self {
        Self::Decode {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
