//! Review ingestion and result-file writing.

pub mod output;
pub mod reviews;
