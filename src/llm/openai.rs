//! Hosted chat-completion backend.

use reqwest::Client;
use serde_json::json;
use tracing::{debug, info};

use super::{parse_aspects_payload, parse_topics_payload, LabelBackend, LabelError, LabelSet};
use crate::config::Settings;

const SYSTEM_MESSAGE: &str = "You are a product review analysis expert.";
const TEMPERATURE: f64 = 0.3;
const MAX_TOKENS: u32 = 1000;

/// Backend for a hosted chat-completion API: single request, bounded output
/// length, low sampling temperature for reproducibility.
pub struct OpenAiBackend {
    client: Client,
    url: String,
    api_key: String,
    model: String,
}

impl OpenAiBackend {
    pub fn new(settings: &Settings) -> Result<Self, LabelError> {
        let api_key = settings
            .openai_api_key
            .clone()
            .ok_or(LabelError::MissingCredentials)?;
        Ok(Self {
            client: Client::new(),
            url: settings.openai_url.clone(),
            api_key,
            model: settings.openai_model.clone(),
        })
    }
}

impl LabelBackend for OpenAiBackend {
    async fn generate_labels(
        &self,
        samples: &[String],
        constraint: Option<&[&str]>,
    ) -> Result<LabelSet, LabelError> {
        let prompt = match constraint {
            Some(aspects) => super::prompts::aspects_prompt(samples, aspects),
            None => super::prompts::topics_prompt(samples, 10),
        };
        debug!(chars = prompt.len(), "sending chat completion request");

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "model": self.model,
                "messages": [
                    {"role": "system", "content": SYSTEM_MESSAGE},
                    {"role": "user", "content": prompt},
                ],
                "temperature": TEMPERATURE,
                "max_tokens": MAX_TOKENS,
            }))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(LabelError::Status(response.status()));
        }

        let payload: serde_json::Value = response.json().await?;
        let content = payload
            .pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .ok_or(LabelError::MissingKey("choices"))?;

        let labels = match constraint {
            Some(_) => parse_aspects_payload(content)?,
            None => parse_topics_payload(content)?,
        };
        info!(labels = labels.len(), "received label set from hosted backend");
        Ok(labels)
    }
}
