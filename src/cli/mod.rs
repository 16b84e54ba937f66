//! Command-line interface wiring for review-lens.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod aspects;
pub mod cluster;
pub mod llm_topics;
pub mod topics;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Product review categorization toolkit", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Cluster(args) => cluster::run(args, settings),
            Commands::Topics(args) => topics::run(args, settings),
            Commands::LlmTopics(args) => llm_topics::run(args, settings).await,
            Commands::Aspects(args) => aspects::run(args, settings).await,
        }
    }
}

/// Supported sub-commands, one per categorization flow.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Cluster reviews by tf-idf centroids and name each cluster.
    Cluster(cluster::Args),
    /// Model reviews as LDA topics.
    Topics(topics::Args),
    /// Ask a local inference server for topics and assign by keyword overlap.
    LlmTopics(llm_topics::Args),
    /// Ask a hosted chat API for fixed-vocabulary aspects with sentiment.
    Aspects(aspects::Args),
}

/// Derive `<prefix>_<input-stem>.csv` inside the configured outputs dir.
pub(crate) fn derived_output(settings: &Settings, input: &Path, prefix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("reviews");
    settings.join_output(format!("{prefix}_{stem}.csv"))
}
