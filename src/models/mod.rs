// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for the color manifest.

pub mod catalog;
pub mod entry;
