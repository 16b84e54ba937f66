//! Assignment of reviews to externally supplied labels, with sentiment
//! fallback. Model-driven flows assign through the grouping engine directly;
//! this module only covers label sets coming from the external adapter.

use clap::ValueEnum;
use tracing::debug;

use crate::llm::{LabelSet, Sentiment};

/// How document text and keywords are compared. The llm-topics flow
/// historically matched raw case while the aspect flow lowercased both sides;
/// both behaviours are kept behind this explicit option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CaseFolding {
    Preserve,
    Lower,
}

/// What to do when no keyword of any label overlaps the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ZeroOverlapPolicy {
    /// Default to the first label in the list, regardless of relevance.
    FirstLabel,
    /// Leave the review unassigned.
    Unassigned,
}

/// Words whose presence counts toward positive sentiment.
pub const POSITIVE_WORDS: &[&str] = &["good", "great", "excellent", "amazing", "love", "best"];
/// Words whose presence counts toward negative sentiment.
pub const NEGATIVE_WORDS: &[&str] = &["bad", "poor", "terrible", "awful", "hate", "worst"];

/// Pick the label with the highest keyword overlap. A new maximum must be
/// strictly greater to replace the running choice, so the first-seen label
/// wins all ties, including the zero-overlap case.
pub fn assign_label(
    text: &str,
    labels: &LabelSet,
    folding: CaseFolding,
    policy: ZeroOverlapPolicy,
) -> Option<usize> {
    let folded_text = match folding {
        CaseFolding::Preserve => text.to_string(),
        CaseFolding::Lower => text.to_lowercase(),
    };

    let mut best = 0usize;
    let mut max_overlap = 0usize;
    for (idx, label) in labels.iter().enumerate() {
        let overlap = label
            .keywords
            .iter()
            .filter(|keyword| match folding {
                CaseFolding::Preserve => folded_text.contains(keyword.as_str()),
                CaseFolding::Lower => folded_text.contains(&keyword.to_lowercase()),
            })
            .count();
        if overlap > max_overlap {
            max_overlap = overlap;
            best = idx;
        }
    }

    if max_overlap == 0 && policy == ZeroOverlapPolicy::Unassigned {
        debug!("no keyword overlap; leaving review unassigned");
        return None;
    }
    Some(best)
}

/// Derive sentiment for a review. A non-neutral label sentiment stands; a
/// neutral one falls back to a lexicon scan over the document text, where
/// strictly more positive than negative hits yields positive and vice versa.
pub fn resolve_sentiment(label_sentiment: Sentiment, text: &str) -> Sentiment {
    if label_sentiment != Sentiment::Neutral {
        return label_sentiment;
    }
    let lower = text.to_lowercase();
    let positive = POSITIVE_WORDS.iter().filter(|w| lower.contains(**w)).count();
    let negative = NEGATIVE_WORDS.iter().filter(|w| lower.contains(**w)).count();
    if positive > negative {
        Sentiment::Positive
    } else if negative > positive {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}
