//! Grouping engines and label synthesis.

pub mod kmeans;
pub mod lda;
pub mod naming;

/// A named group produced by the label synthesizer. Immutable after creation.
#[derive(Debug, Clone)]
pub struct NamedGroup {
    pub id: usize,
    pub name: String,
    pub keywords: Vec<String>,
}
