//! CLI entry-point for the hosted aspect flow.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{
    assign::{CaseFolding, ZeroOverlapPolicy},
    config::Settings,
    llm::openai::OpenAiBackend,
    pipeline,
};

/// Args for the `aspects` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Input TSV file of reviews.
    pub input: PathBuf,
    /// Output CSV path; derived from the input name plus a timestamp when
    /// omitted.
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Override the number of sample documents embedded in the prompt.
    #[arg(long)]
    pub sample_size: Option<usize>,
    /// Keyword comparison case handling. This flow historically lowercased
    /// both sides.
    #[arg(long, value_enum, default_value_t = CaseFolding::Lower)]
    pub case_folding: CaseFolding,
    /// Behaviour when no keyword overlaps a review.
    #[arg(long, value_enum, default_value_t = ZeroOverlapPolicy::FirstLabel)]
    pub zero_overlap: ZeroOverlapPolicy,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let output = args.output.clone().unwrap_or_else(|| {
        let stem = args
            .input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("reviews");
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        settings.join_output(format!(
            "openai_aspect_modeling_results_{stem}_{timestamp}.csv"
        ))
    });
    let sample_size = args.sample_size.unwrap_or(settings.label_sample_size);
    let backend = OpenAiBackend::new(&settings)?;
    pipeline::run_aspects(
        &args.input,
        &output,
        &backend,
        sample_size,
        args.case_folding,
        args.zero_overlap,
    )
    .await
}
