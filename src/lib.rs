// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Flag Colors - average-color manifest generator
//!
//! Computes the mean color of every flag image in a directory and writes a
//! JSON manifest pairing each state name with its normalized average color,
//! a display `rgb(R, G, B)` string and a thumbnail path. The manifest colors
//! can also be grouped with k-means.

pub mod app;
pub mod color;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod util;

pub use app::CatalogBuilder;
pub use color::average::{average_color, ChannelMeans};
pub use color::cluster::{cluster_catalog, ClusterReport};
pub use config::{ClusterConfig, Config};
pub use error::{CatalogError, Result};
pub use models::{catalog::Catalog, entry::StateColorEntry};
