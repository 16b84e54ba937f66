//! External semantic service adapter: delegate group/aspect discovery to a
//! hosted or locally served language model behind a capability trait, so the
//! grouping and assignment core stays testable without network access.

pub mod ollama;
pub mod openai;
pub mod prompts;

use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed domain vocabulary for the aspect mode. Every aspect name returned by
/// a constrained backend must come from this list.
pub const ASPECT_VOCABULARY: [&str; 10] = [
    "phone", "price", "camera", "battery", "display", "design", "software", "cpu/gpu", "memory",
    "network",
];

/// Three-valued review sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

/// One externally supplied label: a name, five keywords, and an optional
/// sentiment (topic payloads carry none and default to neutral).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    pub keywords: Vec<String>,
    #[serde(default)]
    pub sentiment: Sentiment,
}

/// Labels produced by one `generate_labels` call.
pub type LabelSet = Vec<Label>;

/// Failure taxonomy for the external service. Every variant terminates the
/// run; there are no retries.
#[derive(Debug, Error)]
pub enum LabelError {
    #[error("label service returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("label service transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("label payload was not valid JSON: {0}")]
    MalformedPayload(#[from] serde_json::Error),
    #[error("label payload missing `{0}` key")]
    MissingKey(&'static str),
    #[error("aspect `{0}` is outside the fixed vocabulary")]
    UnknownAspect(String),
    #[error("label service returned an empty label set")]
    Empty,
    #[error("no API key configured for the hosted backend")]
    MissingCredentials,
}

/// Capability contract for label generation. Implementations make at most one
/// network call and never retry.
pub trait LabelBackend {
    fn generate_labels(
        &self,
        samples: &[String],
        constraint: Option<&[&str]>,
    ) -> impl Future<Output = Result<LabelSet, LabelError>> + Send;
}

/// Parse a `{"topics": [...]}` payload.
pub fn parse_topics_payload(text: &str) -> Result<LabelSet, LabelError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let topics = value
        .get("topics")
        .ok_or(LabelError::MissingKey("topics"))?
        .clone();
    let labels: LabelSet = serde_json::from_value(topics)?;
    if labels.is_empty() {
        return Err(LabelError::Empty);
    }
    Ok(labels)
}

/// Parse an `{"aspects": [...]}` payload and repair obvious formatting drift
/// (case, stray whitespace) before validating names against the fixed
/// vocabulary.
pub fn parse_aspects_payload(text: &str) -> Result<LabelSet, LabelError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let aspects = value
        .get("aspects")
        .ok_or(LabelError::MissingKey("aspects"))?
        .clone();
    let mut labels: LabelSet = serde_json::from_value(aspects)?;
    if labels.is_empty() {
        return Err(LabelError::Empty);
    }
    for label in &mut labels {
        label.name = label.name.trim().to_lowercase();
        if !ASPECT_VOCABULARY.contains(&label.name.as_str()) {
            return Err(LabelError::UnknownAspect(label.name.clone()));
        }
    }
    Ok(labels)
}

/// Bound the sample documents embedded in a prompt, skipping empties.
pub fn sample_documents(documents: &[String], limit: usize) -> Vec<String> {
    documents
        .iter()
        .filter(|doc| !doc.is_empty())
        .take(limit)
        .cloned()
        .collect()
}
