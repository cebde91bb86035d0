use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::client::ModelBackend;
use crate::util::SecretString;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Fixed decoding parameters. These are constants of the system, not
/// tunable per call; maxOutputTokens alone can be raised via config.
const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.95;
const TOP_K: u32 = 40;

/// Client for Google's Generative Language API. One POST per `complete`
/// call, no retries; authentication is a query-parameter key.
pub struct GeminiBackend {
    api_key: SecretString,
    model: String,
    base_url: String,
    max_output_tokens: u32,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiGenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
    #[serde(rename = "topP")]
    top_p: f32,
    #[serde(rename = "topK")]
    top_k: u32,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiResponseContent,
}

#[derive(Debug, Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    #[serde(default)]
    text: String,
}

impl GeminiBackend {
    pub fn new(api_key: String, model: String, max_output_tokens: u32) -> Result<Self> {
        Self::with_base_url(api_key, model, DEFAULT_BASE_URL.to_string(), max_output_tokens)
    }

    pub fn with_base_url(
        api_key: String,
        model: String,
        base_url: String,
        max_output_tokens: u32,
    ) -> Result<Self> {
        Ok(Self {
            api_key: api_key.into(),
            model,
            base_url,
            max_output_tokens,
            client: Client::builder()
                .timeout(Duration::from_secs(120))
                .build()
                .context("failed to build HTTP client")?,
        })
    }
}

#[async_trait]
impl ModelBackend for GeminiBackend {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: self.max_output_tokens,
                top_p: TOP_P,
                top_k: TOP_K,
            },
        };

        debug!("Calling Gemini API with model: {}", self.model);

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url,
            self.model,
            self.api_key.expose()
        );

        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send request to Gemini API")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            bail!("Gemini API error {}: {}", status, error_text);
        }

        let api_response: GeminiResponse = response
            .json()
            .await
            .context("Failed to parse Gemini API response")?;

        let text = api_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .context("No content in Gemini response")?;

        if text.trim().is_empty() {
            bail!("Gemini response contained an empty text field");
        }

        Ok(text)
    }
}
