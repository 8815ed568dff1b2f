// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image file loading.
//!
//! Images are decoded with the `image` crate and flattened to 8-bit RGB.
//! Alpha and palette information is dropped by the conversion, the same way
//! an RGB conversion in any photo tool would.

use crate::error::{CatalogError, Result};
use image::{ImageReader, RgbImage};
use std::path::Path;

/// Load an image file and convert it to 8-bit RGB.
///
/// The container format is sniffed from the file contents, so a mislabeled
/// extension still decodes. The file handle is closed before this returns.
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| CatalogError::file_system(path, e))?;

    let img = reader.decode().map_err(|e| CatalogError::decode(path, e))?;

    log::debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    Ok(img.to_rgb8())
}
