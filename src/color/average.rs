// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Mean color of an image.
//!
//! Channel sums are accumulated as integers and divided once, so the means
//! are exact up to the final `f64` division. Two views of the result are
//! produced:
//! - the unrounded means divided by 255, for the `color` field
//! - the rounded means as an `rgb(R, G, B)` string, for display
//!
//! Rounding is half to even (127.5 becomes 128, 126.5 becomes 126), which is
//! what the manifest has always used.

use crate::error::{CatalogError, Result};
use crate::io::media;
use image::RgbImage;
use std::path::Path;

/// Largest 8-bit channel value, used for normalization.
pub const CHANNEL_MAX: f64 = 255.0;

/// Per-channel arithmetic means of an RGB image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelMeans {
    /// Mean red, green and blue in [0, 255].
    pub means: [f64; 3],
    /// Number of pixels the means were taken over.
    pub pixel_count: u64,
}

impl ChannelMeans {
    /// Average every pixel of `img`. Returns `None` for an image with no pixels.
    pub fn from_rgb(img: &RgbImage) -> Option<Self> {
        let pixel_count = u64::from(img.width()) * u64::from(img.height());
        if pixel_count == 0 {
            return None;
        }

        let mut sums = [0u64; 3];
        for pixel in img.pixels() {
            for (sum, &value) in sums.iter_mut().zip(pixel.0.iter()) {
                *sum += u64::from(value);
            }
        }

        let count = pixel_count as f64;
        Some(Self {
            means: sums.map(|s| s as f64 / count),
            pixel_count,
        })
    }

    /// Means scaled to [0, 1], unrounded.
    pub fn normalized(&self) -> [f64; 3] {
        self.means.map(|m| m / CHANNEL_MAX)
    }

    /// Means rounded half to even.
    pub fn rounded(&self) -> [u8; 3] {
        self.means.map(round_channel)
    }

    /// Display string of the rounded means, e.g. `rgb(12, 34, 56)`.
    pub fn rgb_string(&self) -> String {
        format_rgb(self.rounded())
    }
}

/// Round a channel mean half to even and clamp it into `u8` range.
pub fn round_channel(mean: f64) -> u8 {
    mean.round_ties_even().clamp(0.0, CHANNEL_MAX) as u8
}

pub fn format_rgb(rgb: [u8; 3]) -> String {
    format!("rgb({}, {}, {})", rgb[0], rgb[1], rgb[2])
}

/// Load an image file and average its pixel channels.
///
/// # Errors
///
/// - `FileSystem` if the file cannot be opened
/// - `Decode` if the contents are not a readable image
/// - `EmptyImage` if the image has no pixels
pub fn average_color(path: &Path) -> Result<ChannelMeans> {
    let img = media::load_rgb(path)?;
    ChannelMeans::from_rgb(&img).ok_or_else(|| CatalogError::EmptyImage {
        path: path.to_path_buf(),
    })
}
