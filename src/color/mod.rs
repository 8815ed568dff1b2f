// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Color computations: per-image averaging and catalog clustering.

pub mod average;
pub mod cluster;
