//! Tab-separated review ingestion.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::info;

/// Columns a review file must carry.
pub const REQUIRED_COLUMNS: &[&str] = &["review_body", "star_rating", "product_id", "product_title"];

/// Immutable input record. Source of truth for a run; never mutated.
#[derive(Debug, Clone)]
pub struct Review {
    pub body: String,
    pub star_rating: Option<i64>,
    pub product_id: String,
    pub product_title: String,
}

#[derive(Debug, Deserialize)]
struct RawRow {
    review_body: Option<String>,
    star_rating: Option<i64>,
    product_id: Option<String>,
    product_title: Option<String>,
}

/// Load reviews from a TSV file, dropping rows with a missing body, product id
/// or product title before any pipeline stage sees them.
pub fn load_reviews(path: &Path) -> Result<Vec<Review>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening review file {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("reading headers from {}", path.display()))?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            bail!("review file {} is missing column `{column}`", path.display());
        }
    }

    let mut reviews = Vec::new();
    let mut dropped = 0usize;
    for result in reader.deserialize() {
        let row: RawRow =
            result.with_context(|| format!("parsing row in {}", path.display()))?;
        match (row.review_body, row.product_id, row.product_title) {
            (Some(body), Some(product_id), Some(product_title))
                if !body.is_empty() && !product_id.is_empty() && !product_title.is_empty() =>
            {
                reviews.push(Review {
                    body,
                    star_rating: row.star_rating,
                    product_id,
                    product_title,
                });
            }
            _ => dropped += 1,
        }
    }

    info!(rows = reviews.len(), dropped, "loaded review rows");
    Ok(reviews)
}
