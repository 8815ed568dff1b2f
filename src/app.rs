// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Catalog building.
//!
//! Walks the flag image directory in filename order, averages each image and
//! collects the results into a [`Catalog`]. Images are processed one at a
//! time and any failure aborts the whole run.

use crate::color::average;
use crate::config::Config;
use crate::error::{CatalogError, Result};
use crate::io::serialization;
use crate::models::{catalog::Catalog, entry::StateColorEntry};
use crate::util::naming;

/// Builds the state color catalog from a directory of flag images.
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    config: Config,
}

impl CatalogBuilder {
    /// Create a builder, rejecting configurations that cannot run.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Filenames of the source images, sorted.
    ///
    /// Only regular files with a configured extension are returned. A
    /// matching file whose name is not valid UTF-8 is an error.
    pub fn list_sources(&self) -> Result<Vec<String>> {
        let dir = &self.config.image_dir;
        let entries = std::fs::read_dir(dir).map_err(|e| CatalogError::file_system(dir, e))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| CatalogError::file_system(dir, e))?;
            let path = entry.path();

            if !path.is_file() || !naming::has_extension(&path, &self.config.extensions) {
                log::debug!("Skipping {}", path.display());
                continue;
            }

            // Names end up in the manifest, so a non UTF-8 one cannot be skipped.
            let name = entry.file_name().into_string().map_err(|name| {
                CatalogError::file_system(
                    &path,
                    std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        format!("filename {:?} is not valid UTF-8", name),
                    ),
                )
            })?;
            files.push(name);
        }

        files.sort();
        Ok(files)
    }

    /// Average one source image into a catalog entry.
    pub fn build_entry(&self, filename: &str) -> Result<StateColorEntry> {
        let path = self.config.image_dir.join(filename);
        let means = average::average_color(&path)?;

        Ok(StateColorEntry::new(
            naming::display_name(filename),
            means.normalized(),
            means.rgb_string(),
            naming::thumbnail_path(&self.config.thumbnail_dir, filename),
        ))
    }

    /// Build the full catalog in filename order.
    pub fn build(&self) -> Result<Catalog> {
        let sources = self.list_sources()?;
        log::info!(
            "Found {} images in {}",
            sources.len(),
            self.config.image_dir.display()
        );

        let mut catalog = Catalog::new();
        for (i, filename) in sources.iter().enumerate() {
            let entry = self.build_entry(filename)?;
            log::info!(
                "[{}/{}] {} -> {}",
                i + 1,
                sources.len(),
                entry.name,
                entry.rgb_string
            );
            catalog.push(entry);
        }
        Ok(catalog)
    }

    /// Write `catalog` to the configured output path.
    pub fn write(&self, catalog: &Catalog) -> Result<()> {
        serialization::export_json(catalog, &self.config.output)?;
        log::info!(
            "Wrote {} entries to {}",
            catalog.len(),
            self.config.output.display()
        );
        Ok(())
    }

    /// Build the catalog and write it out.
    pub fn run(&self) -> Result<Catalog> {
        let catalog = self.build()?;
        self.write(&catalog)?;
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::path::Path;

    fn save_flag(dir: &Path, name: &str, color: [u8; 3]) {
        RgbImage::from_pixel(3, 2, Rgb(color))
            .save(dir.join(name))
            .unwrap();
    }

    fn config_for(dir: &Path) -> Config {
        Config {
            image_dir: dir.to_path_buf(),
            output: dir.join("state_colors.json"),
            ..Config::default()
        }
    }

    #[test]
    fn test_list_sources_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        save_flag(dir.path(), "texas.png", [0, 0, 0]);
        save_flag(dir.path(), "Alaska.png", [0, 0, 0]);
        save_flag(dir.path(), "new_york.png", [0, 0, 0]);
        std::fs::write(dir.path().join("notes.txt"), "not a flag").unwrap();
        std::fs::create_dir(dir.path().join("nested.png")).unwrap();

        let builder = CatalogBuilder::new(config_for(dir.path())).unwrap();
        let sources = builder.list_sources().unwrap();
        assert_eq!(sources, vec!["Alaska.png", "new_york.png", "texas.png"]);
    }

    #[test]
    fn test_build_entry() {
        let dir = tempfile::tempdir().unwrap();
        save_flag(dir.path(), "new_york.png", [255, 255, 255]);

        let builder = CatalogBuilder::new(config_for(dir.path())).unwrap();
        let entry = builder.build_entry("new_york.png").unwrap();

        assert_eq!(entry.name, "new york");
        assert_eq!(entry.color, [1.0, 1.0, 1.0]);
        assert_eq!(entry.rgb_string, "rgb(255, 255, 255)");
        assert_eq!(entry.thumbnail, "state_flags_thumbnails/new_york.png");
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let builder = CatalogBuilder::new(config_for(&dir.path().join("absent"))).unwrap();
        assert!(matches!(
            builder.build(),
            Err(CatalogError::FileSystem { .. })
        ));
    }

    #[test]
    fn test_corrupt_image_aborts_run() {
        let dir = tempfile::tempdir().unwrap();
        save_flag(dir.path(), "alabama.png", [10, 20, 30]);
        std::fs::write(dir.path().join("broken.png"), b"garbage").unwrap();

        let builder = CatalogBuilder::new(config_for(dir.path())).unwrap();
        assert!(matches!(builder.run(), Err(CatalogError::Decode { .. })));
        assert!(!dir.path().join("state_colors.json").exists());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = Config {
            extensions: Vec::new(),
            ..Config::default()
        };
        assert!(matches!(
            CatalogBuilder::new(config),
            Err(CatalogError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_empty_image_aborts_run() {
        let dir = tempfile::tempdir().unwrap();
        save_flag(dir.path(), "alabama.png", [10, 20, 30]);
        std::fs::write(dir.path().join("empty.ppm"), b"P6\n0 0\n255\n").unwrap();

        let config = Config {
            extensions: vec!["png".to_string(), "ppm".to_string()],
            ..config_for(dir.path())
        };
        let builder = CatalogBuilder::new(config).unwrap();
        assert!(matches!(builder.run(), Err(CatalogError::EmptyImage { .. })));
        assert!(!dir.path().join("state_colors.json").exists());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_filename_aborts_run() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        save_flag(dir.path(), "ohio.png", [0, 0, 0]);
        let bad = dir.path().join(OsStr::from_bytes(b"bad\xff.png"));
        RgbImage::from_pixel(1, 1, Rgb([1, 2, 3]))
            .save_with_format(&bad, image::ImageFormat::Png)
            .unwrap();

        let builder = CatalogBuilder::new(config_for(dir.path())).unwrap();
        match builder.run() {
            Err(CatalogError::FileSystem { path, source }) => {
                assert_eq!(path, bad);
                assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
            }
            other => panic!("expected FileSystem error, got {:?}", other),
        }
        assert!(!dir.path().join("state_colors.json").exists());
    }
}
