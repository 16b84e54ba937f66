//! Comma-separated result writers, one row shape per flow.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::llm::Sentiment;

/// Output row for the centroid-clustering flow.
#[derive(Debug, Clone, Serialize)]
pub struct ClusterRow {
    pub review_body: String,
    pub star_rating: Option<i64>,
    pub product_id: String,
    pub product_title: String,
    pub cluster: usize,
    pub cluster_name: String,
}

/// Output row for the LDA and llm-topics flows.
#[derive(Debug, Clone, Serialize)]
pub struct TopicRow {
    pub review_body: String,
    pub star_rating: Option<i64>,
    pub product_id: String,
    pub product_title: String,
    pub topic: Option<usize>,
    pub topic_name: String,
}

/// Output row for the aspect flow.
#[derive(Debug, Clone, Serialize)]
pub struct AspectRow {
    pub review_body: String,
    pub star_rating: Option<i64>,
    pub product_id: String,
    pub product_title: String,
    pub aspect: String,
    pub keywords: String,
    pub sentiment: Sentiment,
}

/// Serialize any of the row shapes to a CSV file.
pub fn write_rows<R: Serialize>(rows: &[R], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating output dir for {}", path.display()))?;
    }
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating output file {}", path.display()))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    info!(path = %path.display(), rows = rows.len(), "wrote result csv");
    Ok(())
}
