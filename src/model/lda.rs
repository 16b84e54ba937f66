//! Latent Dirichlet allocation over a count matrix, with a bounded iteration
//! budget and deterministic argmax reassignment so fitted models are
//! reproducible across runs.

use anyhow::{bail, Result};
use ndarray::{Array2, ArrayView2};
use tracing::info;

/// Topic-model configuration.
#[derive(Debug, Clone)]
pub struct LdaConfig {
    pub topics: usize,
    pub max_iterations: usize,
    /// Document-topic concentration.
    pub alpha: f64,
    /// Topic-word concentration.
    pub beta: f64,
}

impl LdaConfig {
    pub fn new(topics: usize) -> Self {
        Self {
            topics,
            max_iterations: 10,
            alpha: 0.1,
            beta: 0.01,
        }
    }
}

/// Fitted model: topic-word weights and per-document topic distributions,
/// both read-only after fitting.
#[derive(Debug)]
pub struct FittedLda {
    topic_word: Array2<f64>,
    doc_topic: Array2<f64>,
}

/// Fit K topic-word distributions on a document-term count matrix.
pub fn fit(config: &LdaConfig, matrix: &ArrayView2<f64>) -> Result<FittedLda> {
    let n_docs = matrix.nrows();
    let vocab = matrix.ncols();
    if n_docs < config.topics {
        bail!(
            "corpus of {n_docs} documents cannot support {} topics",
            config.topics
        );
    }

    // Expand rows back into token occurrences; counts are integral by
    // construction of the count vectorizer.
    let docs: Vec<Vec<usize>> = matrix
        .rows()
        .into_iter()
        .map(|row| {
            let mut tokens = Vec::new();
            for (word, &count) in row.iter().enumerate() {
                for _ in 0..count.round() as usize {
                    tokens.push(word);
                }
            }
            tokens
        })
        .collect();

    let k = config.topics;
    let mut word_topic = vec![vec![0usize; k]; vocab];
    let mut doc_topic = vec![vec![0usize; k]; n_docs];
    let mut topic_totals = vec![0usize; k];
    let mut token_topics: Vec<Vec<usize>> = Vec::with_capacity(n_docs);

    for (doc_id, doc) in docs.iter().enumerate() {
        let mut assigned = Vec::with_capacity(doc.len());
        for (pos, &word) in doc.iter().enumerate() {
            let topic = (doc_id + pos) % k;
            word_topic[word][topic] += 1;
            doc_topic[doc_id][topic] += 1;
            topic_totals[topic] += 1;
            assigned.push(topic);
        }
        token_topics.push(assigned);
    }

    for _ in 0..config.max_iterations {
        for (doc_id, doc) in docs.iter().enumerate() {
            for (pos, &word) in doc.iter().enumerate() {
                let old = token_topics[doc_id][pos];
                word_topic[word][old] -= 1;
                doc_topic[doc_id][old] -= 1;
                topic_totals[old] -= 1;

                let new = best_topic(
                    config,
                    vocab,
                    word,
                    &word_topic,
                    &doc_topic[doc_id],
                    &topic_totals,
                );

                word_topic[word][new] += 1;
                doc_topic[doc_id][new] += 1;
                topic_totals[new] += 1;
                token_topics[doc_id][pos] = new;
            }
        }
    }

    // Smooth counts into probabilities.
    let mut topic_word = Array2::<f64>::zeros((k, vocab));
    for topic in 0..k {
        let denom = topic_totals[topic] as f64 + vocab as f64 * config.beta;
        for word in 0..vocab {
            topic_word[(topic, word)] = (word_topic[word][topic] as f64 + config.beta) / denom;
        }
    }
    let mut doc_topic_probs = Array2::<f64>::zeros((n_docs, k));
    for (doc_id, counts) in doc_topic.iter().enumerate() {
        let total: usize = counts.iter().sum();
        let denom = total as f64 + k as f64 * config.alpha;
        for (topic, &count) in counts.iter().enumerate() {
            doc_topic_probs[(doc_id, topic)] = (count as f64 + config.alpha) / denom;
        }
    }

    info!(topics = k, docs = n_docs, "fit lda topic model");
    Ok(FittedLda {
        topic_word,
        doc_topic: doc_topic_probs,
    })
}

fn best_topic(
    config: &LdaConfig,
    vocab: usize,
    word: usize,
    word_topic: &[Vec<usize>],
    doc_counts: &[usize],
    topic_totals: &[usize],
) -> usize {
    let doc_total: usize = doc_counts.iter().sum();
    let mut best = 0usize;
    let mut best_score = f64::NEG_INFINITY;
    for topic in 0..config.topics {
        let word_prob = (word_topic[word][topic] as f64 + config.beta)
            / (topic_totals[topic] as f64 + vocab as f64 * config.beta);
        let doc_prob = (doc_counts[topic] as f64 + config.alpha)
            / (doc_total as f64 + config.topics as f64 * config.alpha);
        let score = word_prob * doc_prob;
        if score > best_score {
            best_score = score;
            best = topic;
        }
    }
    best
}

impl FittedLda {
    /// Normalized topic-probability vector for a corpus document.
    pub fn topic_distribution(&self, doc: usize) -> Vec<f64> {
        self.doc_topic.row(doc).to_vec()
    }

    /// Discrete assignment: argmax topic, ties broken by lowest index via a
    /// stable left-to-right scan.
    pub fn assign(&self, doc: usize) -> usize {
        let mut best = 0usize;
        let mut best_prob = f64::NEG_INFINITY;
        for (topic, &prob) in self.doc_topic.row(doc).iter().enumerate() {
            if prob > best_prob {
                best_prob = prob;
                best = topic;
            }
        }
        best
    }

    /// Assign every corpus document, in row order.
    pub fn assign_all(&self) -> Vec<usize> {
        (0..self.doc_topic.nrows()).map(|d| self.assign(d)).collect()
    }

    /// Topic-word weight matrix (K x vocabulary), consumed by the label
    /// synthesizer.
    pub fn topic_word(&self) -> &Array2<f64> {
        &self.topic_word
    }
}
