// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for flag images and manifest files.

pub mod media;
pub mod serialization;
