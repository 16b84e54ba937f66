//! Runtime configuration utilities for review-lens.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Generate endpoint of the local inference server.
    pub ollama_url: String,
    /// Model name sent to the local inference server.
    pub ollama_model: String,
    /// Chat-completion endpoint of the hosted API.
    pub openai_url: String,
    /// API key for the hosted chat-completion API, if configured.
    pub openai_api_key: Option<String>,
    /// Model name sent to the hosted API.
    pub openai_model: String,
    /// Maximum number of sample documents embedded in a label prompt.
    pub label_sample_size: usize,
    /// Root folder for result files.
    pub outputs_dir: PathBuf,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let ollama_url = env::var("OLLAMA_URL")
            .unwrap_or_else(|_| "http://localhost:11434/api/generate".to_string());
        let ollama_model = env::var("OLLAMA_MODEL").unwrap_or_else(|_| "mistral".to_string());
        let openai_url = env::var("OPENAI_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1/chat/completions".to_string());
        let openai_api_key = env::var("OPENAI_API_KEY").ok();
        let openai_model =
            env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string());
        let label_sample_size = env::var("LABEL_SAMPLE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100);
        let outputs_dir = env::var("OUTPUTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        std::fs::create_dir_all(&outputs_dir).context("creating outputs dir")?;

        Ok(Self {
            ollama_url,
            ollama_model,
            openai_url,
            openai_api_key,
            openai_model,
            label_sample_size,
            outputs_dir,
        })
    }

    /// Convenience helper for derived output path segments.
    pub fn join_output<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.outputs_dir.join(path)
    }
}
