// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Per-state color entry.
//!
//! One entry is produced for every processed flag image. Field order here is
//! the field order of the JSON manifest.

use serde::{Deserialize, Serialize};

/// Average color of a single state's flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateColorEntry {
    /// State name derived from the image filename.
    pub name: String,
    /// Unrounded channel means divided by 255, each in [0, 1].
    pub color: [f64; 3],
    /// Rounded channel means as `rgb(R, G, B)`.
    #[serde(rename = "rgbString")]
    pub rgb_string: String,
    /// Relative path of the flag thumbnail.
    pub thumbnail: String,
}

impl StateColorEntry {
    /// Create an entry from already computed values.
    pub fn new(name: String, color: [f64; 3], rgb_string: String, thumbnail: String) -> Self {
        Self {
            name,
            color,
            rgb_string,
            thumbnail,
        }
    }
}
