//! End-to-end UI generation: prompt → model (or fallback) → artifact.

pub mod extract;
pub mod generation;
pub mod prompt;
pub mod template;

use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::{Config, LlmConfig};
use crate::llm::client::ModelBackend;
use crate::llm::create_backend;
use crate::validator::{validate_artifact, ValidationReport};
use crate::writer::write_artifact;
use generation::{GeneratedCode, GenerationClient};
use prompt::{build_prompt, Theme};
use template::fallback_template;

/// Inputs for one generation call. Immutable once passed to `generate_ui`.
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    /// Free-text description of the app to generate. Required; an empty
    /// value is degenerate but valid and produces a generic prompt.
    pub app_idea: String,
    pub theme: Theme,
    pub features: Vec<String>,
    /// Per-call credential override. The instance credential resolved at
    /// construction stays untouched.
    pub api_key: Option<String>,
}

impl GenerationOptions {
    pub fn new(app_idea: impl Into<String>) -> Self {
        Self {
            app_idea: app_idea.into(),
            theme: Theme::default(),
            features: Vec::new(),
            api_key: None,
        }
    }
}

/// Orchestrates the pipeline and owns the once-resolved credential state.
/// Generation always produces an artifact; only filesystem failures abort.
pub struct UiGenerator {
    project_root: PathBuf,
    llm_config: LlmConfig,
    client: GenerationClient,
}

impl UiGenerator {
    /// Build a generator rooted at `project_root` (defaults to the current
    /// directory). The API key is resolved from the environment exactly
    /// once: if it is absent here, this instance stays in fallback mode for
    /// its lifetime.
    pub fn new(project_root: Option<PathBuf>, config: &Config) -> Result<Self> {
        let project_root = match project_root {
            Some(root) => root,
            None => env::current_dir()?,
        };

        let client = match config.resolve_api_key() {
            Some(key) => GenerationClient::new(Some(create_backend(&config.llm, key, false)?)),
            None => GenerationClient::fallback_only(),
        };

        Ok(Self {
            project_root,
            llm_config: config.llm.clone(),
            client,
        })
    }

    /// Replace the model backend, e.g. with a mock for dry runs and tests.
    pub fn with_backend(mut self, backend: Box<dyn ModelBackend>) -> Self {
        self.client = GenerationClient::new(Some(backend));
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Generate the UI source and persist it, returning the artifact path.
    /// Model and extraction failures degrade to the fallback template and
    /// never surface; only writer errors propagate.
    pub async fn generate_ui(&self, options: &GenerationOptions) -> Result<PathBuf> {
        let prompt = build_prompt(options);

        let generated = match &options.api_key {
            // Per-call override: a one-off client with the override key.
            // A backend that cannot be built degrades like any other
            // generation failure; only the writer may fail outward.
            Some(key) => match create_backend(&self.llm_config, key.clone(), false) {
                Ok(backend) => GenerationClient::new(Some(backend)).generate(&prompt).await,
                Err(err) => {
                    warn!(
                        "Cannot build backend for per-call key override, using fallback template: {:#}",
                        err
                    );
                    GeneratedCode::Fallback(fallback_template())
                }
            },
            None => self.client.generate(&prompt).await,
        };

        let provenance = if generated.is_fallback() {
            "fallback template"
        } else {
            "model"
        };

        let path = write_artifact(&self.project_root, generated.code())?;
        info!("Generated UI from {} at {:?}", provenance, path);
        Ok(path)
    }

    /// Re-read the written artifact and check the required markers. Safe to
    /// call any time, regardless of whether this instance wrote the file.
    pub fn validate_generated_ui(&self, path: &Path) -> ValidationReport {
        validate_artifact(path)
    }
}
