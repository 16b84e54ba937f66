//! CLI entry-point for the local-inference topic flow.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{
    assign::{CaseFolding, ZeroOverlapPolicy},
    config::Settings,
    llm::ollama::OllamaBackend,
    pipeline,
};

/// Args for the `llm-topics` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Input TSV file of reviews.
    pub input: PathBuf,
    /// Output CSV path; derived from the input name when omitted.
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Number of topics requested from the backend.
    #[arg(long, default_value_t = 10)]
    pub topics: usize,
    /// Override the number of sample documents embedded in the prompt.
    #[arg(long)]
    pub sample_size: Option<usize>,
    /// Keyword comparison case handling. This flow historically preserved case.
    #[arg(long, value_enum, default_value_t = CaseFolding::Preserve)]
    pub case_folding: CaseFolding,
    /// Behaviour when no keyword overlaps a review.
    #[arg(long, value_enum, default_value_t = ZeroOverlapPolicy::FirstLabel)]
    pub zero_overlap: ZeroOverlapPolicy,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let output = args.output.clone().unwrap_or_else(|| {
        super::derived_output(&settings, &args.input, "ollama_topic_modeling_results")
    });
    let sample_size = args.sample_size.unwrap_or(settings.label_sample_size);
    let backend = OllamaBackend::new(&settings, args.topics);
    pipeline::run_llm_topics(
        &args.input,
        &output,
        &backend,
        sample_size,
        args.case_folding,
        args.zero_overlap,
    )
    .await
}
