//! Corpus-trained word vectors for naming enrichment.
//!
//! Windowed co-occurrence counts over the most frequent context terms stand in
//! for a learned embedding: cheap, deterministic, and trained on exactly the
//! corpus being grouped. Only nearest-neighbour lookup is exposed.

use indexmap::IndexMap;
use ndarray::Array2;
use tracing::info;

/// Default context window, matching the word2vec settings the pipeline
/// originally shipped with.
pub const DEFAULT_WINDOW: usize = 5;
/// Default vector dimensionality.
pub const DEFAULT_DIMS: usize = 100;

/// Word vectors fit on one corpus; read-only after training.
pub struct WordEmbeddings {
    vocab: IndexMap<String, usize>,
    vectors: Array2<f64>,
}

/// Train embeddings over a normalized corpus. Documents are sequences of
/// space-separated terms; empty documents contribute nothing.
pub fn train(corpus: &[String], window: usize, dims: usize) -> WordEmbeddings {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for doc in corpus {
        for token in doc.split_whitespace() {
            *counts.entry(token.to_string()).or_insert(0) += 1;
        }
    }

    // Context axes: the most frequent terms, alphabetical tie-break.
    let mut ranked: Vec<(&String, &usize)> = counts.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    let context: IndexMap<String, usize> = ranked
        .iter()
        .take(dims)
        .enumerate()
        .map(|(idx, (term, _))| ((*term).clone(), idx))
        .collect();

    let mut vocab: IndexMap<String, usize> = IndexMap::new();
    for term in counts.keys() {
        let next = vocab.len();
        vocab.entry(term.clone()).or_insert(next);
    }

    let mut vectors = Array2::<f64>::zeros((vocab.len(), context.len().max(1)));
    for doc in corpus {
        let tokens: Vec<&str> = doc.split_whitespace().collect();
        for (i, token) in tokens.iter().enumerate() {
            let row = vocab[*token];
            let lo = i.saturating_sub(window);
            let hi = (i + window + 1).min(tokens.len());
            for (j, neighbour) in tokens.iter().enumerate().take(hi).skip(lo) {
                if i == j {
                    continue;
                }
                if let Some(&col) = context.get(*neighbour) {
                    vectors[(row, col)] += 1.0;
                }
            }
        }
    }

    info!(vocab = vocab.len(), dims = context.len(), "trained word embeddings");
    WordEmbeddings { vocab, vectors }
}

impl WordEmbeddings {
    /// Single nearest neighbour of `word` by cosine similarity, or `None` when
    /// the word is out of vocabulary or has an all-zero vector.
    pub fn most_similar(&self, word: &str) -> Option<String> {
        let &idx = self.vocab.get(word)?;
        let target = self.vectors.row(idx);
        if target.dot(&target) == 0.0 {
            return None;
        }
        let mut best: Option<(usize, f64)> = None;
        for cand_idx in 0..self.vectors.nrows() {
            if cand_idx == idx {
                continue;
            }
            let candidate = self.vectors.row(cand_idx);
            let score = cosine(
                target.as_slice().unwrap_or(&[]),
                candidate.as_slice().unwrap_or(&[]),
            );
            if best.map_or(score > 0.0, |(_, b)| score > b) {
                best = Some((cand_idx, score));
            }
        }
        best.and_then(|(cand_idx, _)| {
            self.vocab
                .get_index(cand_idx)
                .map(|(term, _)| term.clone())
        })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.vocab.contains_key(word)
    }
}

fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|v| v * v).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
