//! Generative word source.
//!
//! A [`WordSource`] produces raw candidate text for a word length. It makes no
//! promise about the text: the selector normalizes and validates every
//! candidate before serving it.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::GeminiConfig;

/// Error type for word source operations.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Word source not configured: {0}")]
    NotConfigured(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Word source returned no text")]
    EmptyResponse,

    #[error("Word source timed out")]
    Timeout,
}

/// Anything that can suggest a word of a given length.
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Produce raw candidate text for a word with `length` letters.
    async fn generate(&self, length: usize) -> Result<String, SourceError>;
}

/// Word source backed by Google's Gemini `generateContent` API.
pub struct GeminiWordSource {
    config: GeminiConfig,
    client: Client,
}

impl GeminiWordSource {
    pub fn new(config: GeminiConfig, client: Client) -> Self {
        Self { config, client }
    }

    /// Build the API URL for the configured model.
    ///
    /// The API key goes in the `x-goog-api-key` header, never in the URL.
    fn api_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

/// Prompt asking for exactly one word of the given length.
pub fn word_prompt(length: usize) -> String {
    format!(
        "Give me exactly one random common English word that is exactly {length} letters long.\n\
         Rules:\n\
         - Return ONLY the single word, nothing else: no punctuation, no explanation, no sentence.\n\
         - The word must be a real, common English word.\n\
         - All uppercase letters.\n\
         Example valid response: DREAM"
    )
}

#[async_trait]
impl WordSource for GeminiWordSource {
    async fn generate(&self, length: usize) -> Result<String, SourceError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| SourceError::NotConfigured("GEMINI_API_KEY is not set".to_string()))?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(word_prompt(length)),
                }],
            }],
            generation_config: GenerationConfig { temperature: 1.0 },
        };

        tracing::debug!(model = %self.config.model, length, "Requesting word from Gemini");

        let response = self
            .client
            .post(self.api_url())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.without_url().to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(SourceError::RateLimited);
            }

            let error_text = response.text().await.unwrap_or_default();
            return Err(SourceError::Api(format!(
                "Gemini API error {}: {}",
                status, error_text
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| {
                SourceError::Api(format!("Failed to parse response: {}", e.without_url()))
            })?;

        body.first_text().ok_or(SourceError::EmptyResponse)
    }
}

// Gemini API wire types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

impl GenerateContentResponse {
    fn first_text(&self) -> Option<String> {
        self.candidates
            .iter()
            .filter_map(|c| c.content.as_ref())
            .flat_map(|c| c.parts.iter())
            .filter_map(|p| p.text.as_deref())
            .map(str::trim)
            .find(|text| !text.is_empty())
            .map(String::from)
    }
}
