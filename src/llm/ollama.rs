//! Local synchronous inference backend (Ollama-style generate endpoint).

use reqwest::Client;
use serde_json::json;
use tracing::{debug, info};

use super::{
    parse_aspects_payload, parse_topics_payload, prompts, LabelBackend, LabelError, LabelSet,
};
use crate::config::Settings;

/// Backend for a locally hosted generate endpoint: one POST per run, no
/// streaming, no retry.
pub struct OllamaBackend {
    client: Client,
    url: String,
    model: String,
    num_topics: usize,
}

impl OllamaBackend {
    pub fn new(settings: &Settings, num_topics: usize) -> Self {
        Self {
            client: Client::new(),
            url: settings.ollama_url.clone(),
            model: settings.ollama_model.clone(),
            num_topics,
        }
    }
}

impl LabelBackend for OllamaBackend {
    async fn generate_labels(
        &self,
        samples: &[String],
        constraint: Option<&[&str]>,
    ) -> Result<LabelSet, LabelError> {
        let prompt = match constraint {
            Some(aspects) => prompts::aspects_prompt(samples, aspects),
            None => prompts::topics_prompt(samples, self.num_topics),
        };
        debug!(chars = prompt.len(), "sending generate request");

        let response = self
            .client
            .post(&self.url)
            .json(&json!({
                "model": self.model,
                "prompt": prompt,
                "stream": false,
            }))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(LabelError::Status(response.status()));
        }

        let payload: serde_json::Value = response.json().await?;
        let text = payload
            .get("response")
            .and_then(|v| v.as_str())
            .ok_or(LabelError::MissingKey("response"))?;

        let labels = match constraint {
            Some(_) => parse_aspects_payload(text)?,
            None => parse_topics_payload(text)?,
        };
        info!(labels = labels.len(), "received label set from local backend");
        Ok(labels)
    }
}
