// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! K-means grouping of catalog colors.
//!
//! Colors are points in the unit RGB cube. Centroids start at random points
//! in the cube, and a centroid that loses all of its members is thrown away
//! and re-seeded at a new random point. Runs a fixed number of iterations
//! rather than testing for convergence.

use crate::color::average::{format_rgb, round_channel, CHANNEL_MAX};
use crate::config::ClusterConfig;
use crate::error::{CatalogError, Result};
use crate::models::catalog::Catalog;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// K-means parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KMeans {
    k: usize,
    iterations: usize,
}

/// Outcome of a k-means run.
#[derive(Debug, Clone, PartialEq)]
pub struct Clustering {
    /// Final centroid of every cluster, `k` of them.
    pub centroids: Vec<[f64; 3]>,
    /// Cluster index of every input point, in input order.
    pub assignments: Vec<usize>,
}

impl Clustering {
    /// Indices of the points assigned to `cluster`, in input order.
    pub fn members(&self, cluster: usize) -> Vec<usize> {
        self.assignments
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == cluster)
            .map(|(i, _)| i)
            .collect()
    }
}

impl KMeans {
    pub fn new(k: usize, iterations: usize) -> Result<Self> {
        if k == 0 {
            return Err(CatalogError::invalid_config("cluster count k must be at least 1"));
        }
        if iterations == 0 {
            return Err(CatalogError::invalid_config("k-means needs at least one iteration"));
        }
        Ok(Self { k, iterations })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Cluster `points`, drawing random centroids from `rng`.
    pub fn fit<R: Rng>(&self, points: &[[f64; 3]], rng: &mut R) -> Clustering {
        let mut centroids: Vec<[f64; 3]> = (0..self.k).map(|_| random_point(rng)).collect();

        for iteration in 0..self.iterations {
            let assignments = assign(points, &centroids);

            let mut sums = vec![[0.0f64; 3]; self.k];
            let mut counts = vec![0usize; self.k];
            for (point, &cluster) in points.iter().zip(&assignments) {
                for axis in 0..3 {
                    sums[cluster][axis] += point[axis];
                }
                counts[cluster] += 1;
            }

            for (cluster, centroid) in centroids.iter_mut().enumerate() {
                *centroid = match counts[cluster] {
                    0 => random_point(rng),
                    n => sums[cluster].map(|s| s / n as f64),
                };
            }

            log::debug!(
                "k-means iteration {}: cluster sizes {:?}",
                iteration + 1,
                counts
            );
        }

        // Members follow the final centroids, not the last iteration's assignment.
        let assignments = assign(points, &centroids);
        Clustering {
            centroids,
            assignments,
        }
    }
}

/// Euclidean distance between two colors.
pub fn distance(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Index of the centroid closest to `point`; the lowest index wins ties.
pub fn nearest(point: &[f64; 3], centroids: &[[f64; 3]]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, centroid) in centroids.iter().enumerate() {
        let dist = distance(point, centroid);
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    best
}

fn assign(points: &[[f64; 3]], centroids: &[[f64; 3]]) -> Vec<usize> {
    points.iter().map(|p| nearest(p, centroids)).collect()
}

fn random_point<R: Rng>(rng: &mut R) -> [f64; 3] {
    [rng.random(), rng.random(), rng.random()]
}

/// One group of states in a [`ClusterReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub index: usize,
    pub centroid: [f64; 3],
    #[serde(rename = "rgbString")]
    pub rgb_string: String,
    /// State names in this cluster, sorted.
    pub members: Vec<String>,
}

/// Serializable result of clustering a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterReport {
    pub k: usize,
    pub iterations: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub clusters: Vec<ClusterSummary>,
}

/// Group the colors of `catalog` with the k-means settings in `config`.
///
/// With a seed the result is reproducible; without one the centroids are
/// seeded from OS entropy.
pub fn cluster_catalog(catalog: &Catalog, config: &ClusterConfig) -> Result<ClusterReport> {
    let kmeans = KMeans::new(config.k, config.iterations)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let clustering = kmeans.fit(&catalog.colors(), &mut rng);
    let entries = catalog.entries();

    let clusters = clustering
        .centroids
        .iter()
        .enumerate()
        .map(|(index, centroid)| {
            let mut members: Vec<String> = clustering
                .members(index)
                .into_iter()
                .map(|i| entries[i].name.clone())
                .collect();
            members.sort();

            ClusterSummary {
                index,
                centroid: *centroid,
                rgb_string: format_rgb(centroid.map(|c| round_channel(c * CHANNEL_MAX))),
                members,
            }
        })
        .collect();

    Ok(ClusterReport {
        k: kmeans.k(),
        iterations: kmeans.iterations(),
        seed: config.seed,
        clusters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::entry::StateColorEntry;

    fn catalog(colors: &[(&str, [f64; 3])]) -> Catalog {
        let mut catalog = Catalog::new();
        for (name, color) in colors {
            catalog.push(StateColorEntry::new(
                name.to_string(),
                *color,
                String::new(),
                String::new(),
            ));
        }
        catalog
    }

    fn config(k: usize, seed: u64) -> ClusterConfig {
        ClusterConfig {
            k,
            seed: Some(seed),
            ..ClusterConfig::default()
        }
    }

    #[test]
    fn test_rejects_zero_k_and_zero_iterations() {
        assert!(matches!(KMeans::new(0, 20), Err(CatalogError::InvalidConfig { .. })));
        assert!(matches!(KMeans::new(4, 0), Err(CatalogError::InvalidConfig { .. })));
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(&[0.0, 0.0, 0.0], &[1.0, 0.0, 0.0]), 1.0);
        assert!((distance(&[0.0, 0.0, 0.0], &[1.0, 1.0, 1.0]) - 3f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_nearest_prefers_lowest_index_on_tie() {
        let centroids = [[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [0.0, 0.0, 0.0]];
        assert_eq!(nearest(&[0.5, 0.5, 0.5], &centroids), 0);
        assert_eq!(nearest(&[0.9, 0.9, 0.9], &centroids), 1);
    }

    #[test]
    fn test_single_cluster_centroid_is_mean() {
        let points = [[0.0, 0.2, 0.4], [1.0, 0.4, 0.0], [0.5, 0.0, 0.2]];
        let mut rng = StdRng::seed_from_u64(7);
        let clustering = KMeans::new(1, 5).unwrap().fit(&points, &mut rng);

        let centroid = clustering.centroids[0];
        assert!((centroid[0] - 0.5).abs() < 1e-12);
        assert!((centroid[1] - 0.2).abs() < 1e-12);
        assert!((centroid[2] - 0.2).abs() < 1e-12);
        assert_eq!(clustering.assignments, vec![0, 0, 0]);
    }

    #[test]
    fn test_every_point_in_its_nearest_cluster() {
        let points: Vec<[f64; 3]> = (0..30)
            .map(|i| {
                let t = i as f64 / 29.0;
                [t, 1.0 - t, (t * 3.0) % 1.0]
            })
            .collect();
        let mut rng = StdRng::seed_from_u64(42);
        let clustering = KMeans::new(4, 20).unwrap().fit(&points, &mut rng);

        assert_eq!(clustering.centroids.len(), 4);
        assert_eq!(clustering.assignments.len(), points.len());
        for (point, &cluster) in points.iter().zip(&clustering.assignments) {
            assert_eq!(cluster, nearest(point, &clustering.centroids));
        }
        let total: usize = (0..4).map(|c| clustering.members(c).len()).sum();
        assert_eq!(total, points.len());
    }

    #[test]
    fn test_same_seed_same_report() {
        let catalog = catalog(&[
            ("ohio", [0.8, 0.1, 0.1]),
            ("texas", [0.7, 0.2, 0.2]),
            ("alaska", [0.1, 0.2, 0.9]),
            ("maine", [0.2, 0.2, 0.8]),
            ("utah", [0.9, 0.9, 0.9]),
        ]);

        let first = cluster_catalog(&catalog, &config(3, 11)).unwrap();
        let second = cluster_catalog(&catalog, &config(3, 11)).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.seed, Some(11));
        assert_eq!(first.clusters.len(), 3);

        let mut all: Vec<String> = first
            .clusters
            .iter()
            .flat_map(|c| c.members.clone())
            .collect();
        all.sort();
        assert_eq!(all, vec!["alaska", "maine", "ohio", "texas", "utah"]);

        for cluster in &first.clusters {
            let mut sorted = cluster.members.clone();
            sorted.sort();
            assert_eq!(cluster.members, sorted);
        }
    }

    #[test]
    fn test_empty_catalog_yields_empty_clusters() {
        let report = cluster_catalog(&Catalog::new(), &config(4, 1)).unwrap();
        assert_eq!(report.clusters.len(), 4);
        assert!(report.clusters.iter().all(|c| c.members.is_empty()));
        for cluster in &report.clusters {
            assert!(cluster.centroid.iter().all(|c| (0.0..1.0).contains(c)));
        }
    }

    #[test]
    fn test_centroid_rgb_string() {
        let catalog = catalog(&[("white", [1.0, 1.0, 1.0])]);
        let report = cluster_catalog(&catalog, &config(1, 3)).unwrap();
        assert_eq!(report.clusters[0].rgb_string, "rgb(255, 255, 255)");
        assert_eq!(report.clusters[0].members, vec!["white"]);
    }
}
