//! Mini-batch centroid clustering over the document-term matrix.

use anyhow::{bail, Result};
use ndarray::{Array2, ArrayView1, ArrayView2};
use rand::{rngs::StdRng, seq::index::sample, Rng, SeedableRng};
use tracing::info;

/// Clustering configuration. The seed pins initial centroid choice and batch
/// sampling so identical inputs reproduce identical partitions.
#[derive(Debug, Clone)]
pub struct KMeansConfig {
    pub clusters: usize,
    pub batch_size: usize,
    pub max_iterations: usize,
    pub seed: u64,
}

impl KMeansConfig {
    pub fn new(clusters: usize) -> Self {
        Self {
            clusters,
            batch_size: 1000,
            max_iterations: 100,
            seed: 42,
        }
    }
}

/// A fitted model: centroids frozen, assignment read-only.
#[derive(Debug)]
pub struct FittedKMeans {
    centroids: Array2<f64>,
}

/// Partition the corpus into exactly K groups by iterative centroid
/// refinement over mini-batches.
pub fn fit(config: &KMeansConfig, matrix: &ArrayView2<f64>) -> Result<FittedKMeans> {
    let n_docs = matrix.nrows();
    if n_docs < config.clusters {
        bail!(
            "corpus of {n_docs} documents cannot be split into {} clusters",
            config.clusters
        );
    }

    let mut rng = StdRng::seed_from_u64(config.seed);

    // Initial centroids: K distinct documents.
    let seeds = sample(&mut rng, n_docs, config.clusters);
    let mut centroids = Array2::<f64>::zeros((config.clusters, matrix.ncols()));
    for (centroid, doc_idx) in seeds.into_iter().enumerate() {
        centroids.row_mut(centroid).assign(&matrix.row(doc_idx));
    }

    let mut counts = vec![0usize; config.clusters];
    let batch = config.batch_size.min(n_docs);
    for _ in 0..config.max_iterations {
        for _ in 0..batch {
            let doc_idx = rng.gen_range(0..n_docs);
            let row = matrix.row(doc_idx);
            let centroid = nearest(&centroids, &row);
            counts[centroid] += 1;
            let eta = 1.0 / counts[centroid] as f64;
            let mut target = centroids.row_mut(centroid);
            for (c, &v) in target.iter_mut().zip(row.iter()) {
                *c += eta * (v - *c);
            }
        }
    }

    info!(clusters = config.clusters, docs = n_docs, "fit mini-batch k-means");
    Ok(FittedKMeans { centroids })
}

impl FittedKMeans {
    /// Hard assignment: nearest centroid by Euclidean distance, ties broken by
    /// lowest centroid index.
    pub fn assign(&self, row: &ArrayView1<f64>) -> usize {
        nearest(&self.centroids, row)
    }

    /// Assign every row of a matrix, in row order.
    pub fn assign_all(&self, matrix: &ArrayView2<f64>) -> Vec<usize> {
        matrix.rows().into_iter().map(|r| self.assign(&r)).collect()
    }

    /// Per-cluster mean weighted-term vectors, consumed by the label
    /// synthesizer.
    pub fn centroids(&self) -> &Array2<f64> {
        &self.centroids
    }
}

fn nearest(centroids: &Array2<f64>, row: &ArrayView1<f64>) -> usize {
    let mut best = 0usize;
    let mut best_dist = f64::INFINITY;
    for (idx, centroid) in centroids.rows().into_iter().enumerate() {
        let dist: f64 = centroid
            .iter()
            .zip(row.iter())
            .map(|(c, v)| (c - v) * (c - v))
            .sum();
        if dist < best_dist {
            best_dist = dist;
            best = idx;
        }
    }
    best
}
