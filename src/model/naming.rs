//! Label synthesis: derive a human-readable name and keyword set per group
//! from its top-weighted terms.

use indexmap::IndexSet;
use ndarray::Array2;
use tracing::debug;

use super::NamedGroup;
use crate::nlp::embeddings::WordEmbeddings;

const TOP_TERMS: usize = 20;
const SEED_TERMS: usize = 5;
const NAME_TERMS: usize = 5;

/// Name centroid clusters. Seed terms are the five heaviest centroid terms;
/// each seed contributes its single nearest embedding neighbour (skipped
/// silently when out of vocabulary). Deduplication goes through an insertion
/// ordered set so names are reproducible run to run.
pub fn name_clusters(
    centroids: &Array2<f64>,
    terms: &[String],
    embeddings: &WordEmbeddings,
) -> Vec<NamedGroup> {
    centroids
        .rows()
        .into_iter()
        .enumerate()
        .map(|(id, centroid)| {
            let ranked = rank_terms(centroid.iter().copied(), terms);
            let keywords: Vec<String> = ranked.iter().take(TOP_TERMS).cloned().collect();

            let mut combined: IndexSet<String> = IndexSet::new();
            for seed in ranked.iter().take(SEED_TERMS) {
                combined.insert(seed.clone());
                if let Some(neighbour) = embeddings.most_similar(seed) {
                    combined.insert(neighbour);
                }
            }
            let name: Vec<&String> = combined.iter().take(NAME_TERMS).collect();
            let name = if name.is_empty() {
                format!("group {id}")
            } else {
                name.iter()
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(" ")
            };

            debug!(cluster = id, %name, "named cluster");
            NamedGroup { id, name, keywords }
        })
        .collect()
}

/// Name LDA topics: top-5 topic terms joined by comma-and-space. Fully
/// deterministic.
pub fn name_topics(topic_word: &Array2<f64>, terms: &[String]) -> Vec<NamedGroup> {
    topic_word
        .rows()
        .into_iter()
        .enumerate()
        .map(|(id, weights)| {
            let ranked = rank_terms(weights.iter().copied(), terms);
            let keywords: Vec<String> = ranked.iter().take(NAME_TERMS).cloned().collect();
            let name = if keywords.is_empty() {
                format!("topic {id}")
            } else {
                keywords.join(", ")
            };
            debug!(topic = id, %name, "named topic");
            NamedGroup { id, name, keywords }
        })
        .collect()
}

/// Terms sorted by weight descending, lowest index first on ties.
fn rank_terms<I: Iterator<Item = f64>>(weights: I, terms: &[String]) -> Vec<String> {
    let mut indexed: Vec<(usize, f64)> = weights.enumerate().collect();
    indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    indexed
        .into_iter()
        .filter_map(|(idx, _)| terms.get(idx).cloned())
        .collect()
}
