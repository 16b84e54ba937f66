//! Per-flow orchestration: load reviews, normalize, fit, name, assign, write.
//!
//! Each flow is a single sequential batch pass over the in-memory corpus. All
//! model state (vocabulary, fitted model, label set) is produced once and
//! read-only afterwards; nothing here is shared across runs.

use std::path::Path;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::{
    assign::{assign_label, resolve_sentiment, CaseFolding, ZeroOverlapPolicy},
    data::{
        output::{write_rows, AspectRow, ClusterRow, TopicRow},
        reviews::{load_reviews, Review},
    },
    llm::{sample_documents, LabelBackend, Sentiment, ASPECT_VOCABULARY},
    model::{kmeans, lda, naming},
    nlp::{
        embeddings,
        normalize::{ContentFilter, Normalizer},
        vectorize::{self, VectorizerConfig},
    },
};

/// Placeholder name for reviews left without a label under the
/// `Unassigned` zero-overlap policy.
pub const UNASSIGNED: &str = "unassigned";

fn normalize_reviews(reviews: &[Review], filter: ContentFilter) -> Vec<String> {
    let started = Instant::now();
    let normalizer = Normalizer::new(filter);
    let docs = normalizer.normalize_corpus(reviews.iter().map(|r| Some(r.body.as_str())));
    info!(
        docs = docs.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "normalized corpus"
    );
    docs
}

/// Centroid-clustering flow over a loaded corpus.
pub fn cluster_reviews(reviews: &[Review], clusters: usize) -> Result<Vec<ClusterRow>> {
    if reviews.len() < clusters {
        bail!(
            "{} reviews cannot be split into {clusters} clusters",
            reviews.len()
        );
    }
    let docs = normalize_reviews(reviews, ContentFilter::Adjectives);

    let started = Instant::now();
    let (vectorizer, matrix) = vectorize::fit(&VectorizerConfig::tfidf(), &docs);
    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "fit tf-idf model"
    );

    let started = Instant::now();
    let model = kmeans::fit(&kmeans::KMeansConfig::new(clusters), &matrix.view())?;
    let assignments = model.assign_all(&matrix.view());
    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "clustered corpus"
    );

    let started = Instant::now();
    let vectors = embeddings::train(&docs, embeddings::DEFAULT_WINDOW, embeddings::DEFAULT_DIMS);
    let groups = naming::name_clusters(model.centroids(), &vectorizer.terms(), &vectors);
    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "named clusters"
    );

    Ok(reviews
        .iter()
        .zip(assignments)
        .map(|(review, cluster)| ClusterRow {
            review_body: review.body.clone(),
            star_rating: review.star_rating,
            product_id: review.product_id.clone(),
            product_title: review.product_title.clone(),
            cluster,
            cluster_name: groups[cluster].name.clone(),
        })
        .collect())
}

/// LDA topic-modeling flow over a loaded corpus.
pub fn topic_model_reviews(
    reviews: &[Review],
    topics: usize,
    max_iterations: usize,
) -> Result<Vec<TopicRow>> {
    if reviews.len() < topics {
        bail!(
            "{} reviews cannot support {topics} topics",
            reviews.len()
        );
    }
    let docs = normalize_reviews(reviews, ContentFilter::AdjectivesAndNouns);

    let started = Instant::now();
    let (vectorizer, matrix) = vectorize::fit(&VectorizerConfig::counts(), &docs);
    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "fit count model"
    );

    let started = Instant::now();
    let mut config = lda::LdaConfig::new(topics);
    config.max_iterations = max_iterations;
    let model = lda::fit(&config, &matrix.view())?;
    let assignments = model.assign_all();
    let groups = naming::name_topics(model.topic_word(), &vectorizer.terms());
    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "fit lda and named topics"
    );

    Ok(reviews
        .iter()
        .zip(assignments)
        .map(|(review, topic)| TopicRow {
            review_body: review.body.clone(),
            star_rating: review.star_rating,
            product_id: review.product_id.clone(),
            product_title: review.product_title.clone(),
            topic: Some(topic),
            topic_name: groups[topic].name.clone(),
        })
        .collect())
}

/// Externally labelled topic flow: one label-generation call, then keyword
/// overlap assignment. A backend failure terminates the run with no output.
pub async fn llm_topic_reviews<B: LabelBackend>(
    reviews: &[Review],
    backend: &B,
    sample_size: usize,
    folding: CaseFolding,
    policy: ZeroOverlapPolicy,
) -> Result<Vec<TopicRow>> {
    let docs = normalize_reviews(reviews, ContentFilter::AdjectivesAndNouns);

    let started = Instant::now();
    let samples = sample_documents(&docs, sample_size);
    let labels = backend
        .generate_labels(&samples, None)
        .await
        .context("generating topic labels")?;
    info!(
        labels = labels.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "generated external topic labels"
    );

    Ok(reviews
        .iter()
        .zip(&docs)
        .map(|(review, doc)| {
            let assigned = assign_label(doc, &labels, folding, policy);
            TopicRow {
                review_body: review.body.clone(),
                star_rating: review.star_rating,
                product_id: review.product_id.clone(),
                product_title: review.product_title.clone(),
                topic: assigned,
                topic_name: assigned
                    .map(|idx| labels[idx].name.clone())
                    .unwrap_or_else(|| UNASSIGNED.to_string()),
            }
        })
        .collect())
}

/// Constrained aspect flow: labels come from the hosted backend restricted to
/// the fixed aspect vocabulary; sentiment falls back to the lexicon scan when
/// the winning label is neutral.
pub async fn aspect_reviews<B: LabelBackend>(
    reviews: &[Review],
    backend: &B,
    sample_size: usize,
    folding: CaseFolding,
    policy: ZeroOverlapPolicy,
) -> Result<Vec<AspectRow>> {
    let docs = normalize_reviews(reviews, ContentFilter::AdjectivesAndNouns);

    let started = Instant::now();
    let samples = sample_documents(&docs, sample_size);
    let labels = backend
        .generate_labels(&samples, Some(&ASPECT_VOCABULARY))
        .await
        .context("generating aspect labels")?;
    info!(
        labels = labels.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "generated external aspect labels"
    );

    Ok(reviews
        .iter()
        .zip(&docs)
        .map(|(review, doc)| {
            let assigned = assign_label(doc, &labels, folding, policy);
            let (aspect, keywords, label_sentiment) = match assigned {
                Some(idx) => (
                    labels[idx].name.clone(),
                    labels[idx].keywords.join(", "),
                    labels[idx].sentiment,
                ),
                None => (UNASSIGNED.to_string(), String::new(), Sentiment::Neutral),
            };
            AspectRow {
                review_body: review.body.clone(),
                star_rating: review.star_rating,
                product_id: review.product_id.clone(),
                product_title: review.product_title.clone(),
                aspect,
                keywords,
                sentiment: resolve_sentiment(label_sentiment, doc),
            }
        })
        .collect())
}

/// File-to-file wrapper for the clustering flow.
pub fn run_cluster(input: &Path, output: &Path, clusters: usize) -> Result<()> {
    let reviews = load_reviews(input)?;
    let rows = cluster_reviews(&reviews, clusters)?;
    write_rows(&rows, output)
}

/// File-to-file wrapper for the LDA flow.
pub fn run_topics(input: &Path, output: &Path, topics: usize, max_iterations: usize) -> Result<()> {
    let reviews = load_reviews(input)?;
    let rows = topic_model_reviews(&reviews, topics, max_iterations)?;
    write_rows(&rows, output)
}

/// File-to-file wrapper for the externally labelled topic flow.
pub async fn run_llm_topics<B: LabelBackend>(
    input: &Path,
    output: &Path,
    backend: &B,
    sample_size: usize,
    folding: CaseFolding,
    policy: ZeroOverlapPolicy,
) -> Result<()> {
    let reviews = load_reviews(input)?;
    let rows = llm_topic_reviews(&reviews, backend, sample_size, folding, policy).await?;
    write_rows(&rows, output)
}

/// File-to-file wrapper for the aspect flow.
pub async fn run_aspects<B: LabelBackend>(
    input: &Path,
    output: &Path,
    backend: &B,
    sample_size: usize,
    folding: CaseFolding,
    policy: ZeroOverlapPolicy,
) -> Result<()> {
    let reviews = load_reviews(input)?;
    let rows = aspect_reviews(&reviews, backend, sample_size, folding, policy).await?;
    write_rows(&rows, output)
}
