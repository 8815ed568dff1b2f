// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Filename conventions of the flag directories.
//!
//! Flag images are named after their state with underscores for spaces
//! (`new_york.png`), and each has a thumbnail of the same filename in a
//! separate directory.

use std::path::Path;

/// State name for an image filename: extension stripped, underscores to spaces.
///
/// Only the final extension is removed, so `x.png.png` becomes `x.png`. Any
/// configured extension is stripped, not just `.png`.
pub fn display_name(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);
    stem.replace('_', " ")
}

/// Thumbnail path for an image filename under `thumbnail_dir`.
///
/// Always joined with `/`, since the manifest is consumed by a browser.
pub fn thumbnail_path(thumbnail_dir: &str, filename: &str) -> String {
    if thumbnail_dir.is_empty() {
        filename.to_string()
    } else if thumbnail_dir.ends_with('/') {
        format!("{}{}", thumbnail_dir, filename)
    } else {
        format!("{}/{}", thumbnail_dir, filename)
    }
}

/// Check whether `path` has one of `extensions`, ignoring ASCII case.
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| extensions.iter().any(|wanted| wanted.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}
