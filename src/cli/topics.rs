//! CLI entry-point for the LDA topic-modeling flow.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{config::Settings, pipeline};

/// Args for the `topics` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Input TSV file of reviews.
    pub input: PathBuf,
    /// Output CSV path; derived from the input name when omitted.
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Number of topics to learn.
    #[arg(long, default_value_t = 10)]
    pub topics: usize,
    /// Iteration cap for topic inference.
    #[arg(long, default_value_t = 10)]
    pub max_iterations: usize,
}

#[instrument(skip(settings))]
pub fn run(args: Args, settings: Settings) -> Result<()> {
    let output = args.output.unwrap_or_else(|| {
        super::derived_output(&settings, &args.input, "topic_modeling_results")
    });
    pipeline::run_topics(&args.input, &output, args.topics, args.max_iterations)
}
