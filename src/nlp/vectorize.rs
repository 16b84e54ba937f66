//! Bounded-vocabulary document-term matrix construction.
//!
//! Fit learns a vocabulary from the full normalized corpus; transform maps any
//! document through the frozen vocabulary, dropping unseen terms. Vocabulary
//! order is alphabetical, so re-fitting the same corpus with the same
//! configuration reproduces identical weights.

use std::collections::HashMap;

use indexmap::IndexMap;
use ndarray::{Array1, Array2};
use tracing::info;

use super::is_stopword;

/// Matrix weighting scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weighting {
    /// Term-frequency / inverse-document-frequency with l2 row normalization.
    TfIdf,
    /// Raw term counts.
    Count,
}

/// Document-frequency bound, either an absolute document count or a fraction
/// of the corpus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DocFreq {
    Count(usize),
    Ratio(f64),
}

impl DocFreq {
    fn resolve(self, n_docs: usize) -> usize {
        match self {
            DocFreq::Count(count) => count,
            DocFreq::Ratio(ratio) => (ratio * n_docs as f64).ceil() as usize,
        }
    }
}

/// Vectorizer configuration; unigram-only by construction.
#[derive(Debug, Clone)]
pub struct VectorizerConfig {
    pub weighting: Weighting,
    pub min_df: DocFreq,
    pub max_df: DocFreq,
    pub max_features: usize,
}

impl VectorizerConfig {
    /// Defaults for the clustering flow.
    pub fn tfidf() -> Self {
        Self {
            weighting: Weighting::TfIdf,
            min_df: DocFreq::Ratio(0.01),
            max_df: DocFreq::Ratio(0.99),
            max_features: 1000,
        }
    }

    /// Defaults for the topic-modeling flow.
    pub fn counts() -> Self {
        Self {
            weighting: Weighting::Count,
            min_df: DocFreq::Count(2),
            max_df: DocFreq::Ratio(0.95),
            max_features: 1000,
        }
    }
}

/// A vectorizer fit on one corpus; vocabulary and idf weights are frozen.
pub struct FittedVectorizer {
    weighting: Weighting,
    vocabulary: IndexMap<String, usize>,
    idf: Vec<f64>,
}

/// Fit a vocabulary on the corpus and produce its document-term matrix.
pub fn fit(config: &VectorizerConfig, corpus: &[String]) -> (FittedVectorizer, Array2<f64>) {
    let n_docs = corpus.len();
    let min_df = config.min_df.resolve(n_docs).max(1);
    let max_df = config.max_df.resolve(n_docs).max(min_df);

    let mut doc_freq: HashMap<&str, usize> = HashMap::new();
    let mut term_freq: HashMap<&str, usize> = HashMap::new();
    for doc in corpus {
        let mut seen: Vec<&str> = Vec::new();
        for token in doc.split_whitespace() {
            if is_stopword(token) {
                continue;
            }
            *term_freq.entry(token).or_insert(0) += 1;
            if !seen.contains(&token) {
                seen.push(token);
                *doc_freq.entry(token).or_insert(0) += 1;
            }
        }
    }

    let mut candidates: Vec<(&str, usize, usize)> = doc_freq
        .iter()
        .filter(|(_, &df)| df >= min_df && df <= max_df)
        .map(|(&term, &df)| (term, df, term_freq[term]))
        .collect();
    // Bound the vocabulary by corpus-wide term frequency, alphabetical tie-break.
    candidates.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.0.cmp(b.0)));
    candidates.truncate(config.max_features);
    candidates.sort_by(|a, b| a.0.cmp(b.0));

    let vocabulary: IndexMap<String, usize> = candidates
        .iter()
        .enumerate()
        .map(|(idx, (term, _, _))| (term.to_string(), idx))
        .collect();
    let idf: Vec<f64> = candidates
        .iter()
        .map(|(_, df, _)| (((1 + n_docs) as f64) / ((1 + df) as f64)).ln() + 1.0)
        .collect();

    info!(
        docs = n_docs,
        vocabulary = vocabulary.len(),
        weighting = ?config.weighting,
        "fit vectorizer"
    );

    let fitted = FittedVectorizer {
        weighting: config.weighting,
        vocabulary,
        idf,
    };
    let matrix = fitted.transform_corpus(corpus);
    (fitted, matrix)
}

impl FittedVectorizer {
    /// Vocabulary terms in index order.
    pub fn terms(&self) -> Vec<String> {
        self.vocabulary.keys().cloned().collect()
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Map one normalized document into weighted-term space. Unseen terms are
    /// dropped; this never fails.
    pub fn transform(&self, doc: &str) -> Array1<f64> {
        let mut row = Array1::<f64>::zeros(self.vocabulary.len());
        for token in doc.split_whitespace() {
            if let Some(&idx) = self.vocabulary.get(token) {
                row[idx] += 1.0;
            }
        }
        if self.weighting == Weighting::TfIdf {
            for (idx, value) in row.iter_mut().enumerate() {
                *value *= self.idf[idx];
            }
            let norm = row.dot(&row).sqrt();
            if norm > 0.0 {
                row.mapv_inplace(|v| v / norm);
            }
        }
        row
    }

    /// Transform a batch of documents, rows in corpus order.
    pub fn transform_corpus(&self, corpus: &[String]) -> Array2<f64> {
        let mut matrix = Array2::<f64>::zeros((corpus.len(), self.vocabulary.len()));
        for (i, doc) in corpus.iter().enumerate() {
            matrix.row_mut(i).assign(&self.transform(doc));
        }
        matrix
    }
}
