//! Review categorization pipeline: normalize review text, extract numeric
//! features, group reviews into clusters/topics/aspects, and label every review.

pub mod assign;
pub mod cli;
pub mod config;
pub mod data;
pub mod llm;
pub mod logging;
pub mod model;
pub mod nlp;
pub mod pipeline;
