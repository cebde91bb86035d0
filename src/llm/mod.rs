pub mod client;
pub mod gemini;

use anyhow::Result;

use crate::config::LlmConfig;
use client::{MockBackend, ModelBackend};
use gemini::GeminiBackend;

/// Build a model backend from config and an already-resolved API key.
/// Callers without a key never reach this: the generation layer skips the
/// backend entirely and serves the fallback template.
pub fn create_backend(
    llm_config: &LlmConfig,
    api_key: String,
    dry_run: bool,
) -> Result<Box<dyn ModelBackend>> {
    if dry_run {
        return Ok(Box::new(MockBackend::new()));
    }

    let backend = match &llm_config.base_url {
        Some(base_url) => GeminiBackend::with_base_url(
            api_key,
            llm_config.model.clone(),
            base_url.clone(),
            llm_config.get_max_output_tokens(),
        )?,
        None => GeminiBackend::new(
            api_key,
            llm_config.model.clone(),
            llm_config.get_max_output_tokens(),
        )?,
    };

    Ok(Box::new(backend))
}
