//! CLI entry-point for the centroid-clustering flow.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{config::Settings, pipeline};

/// Args for the `cluster` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Input TSV file of reviews.
    pub input: PathBuf,
    /// Output CSV path; derived from the input name when omitted.
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Number of clusters to partition the corpus into.
    #[arg(long, default_value_t = 10)]
    pub clusters: usize,
}

#[instrument(skip(settings))]
pub fn run(args: Args, settings: Settings) -> Result<()> {
    let output = args
        .output
        .unwrap_or_else(|| super::derived_output(&settings, &args.input, "clustering_results"));
    pipeline::run_cluster(&args.input, &output, args.clusters)
}
