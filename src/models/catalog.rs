// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The ordered catalog of state colors.
//!
//! The catalog is accumulated once, in source filename order, and then
//! written wholesale. It serializes as a bare JSON array.

use super::entry::StateColorEntry;
use serde::{Deserialize, Serialize};

/// Ordered collection of per-state color entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<StateColorEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry at the end of the catalog.
    pub fn push(&mut self, entry: StateColorEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[StateColorEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Normalized colors in catalog order.
    pub fn colors(&self) -> Vec<[f64; 3]> {
        self.entries.iter().map(|e| e.color).collect()
    }
}

impl From<Vec<StateColorEntry>> for Catalog {
    fn from(entries: Vec<StateColorEntry>) -> Self {
        Self { entries }
    }
}
