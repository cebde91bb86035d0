use tracing::{debug, warn};

use super::extract::extract_source;
use super::template::fallback_template;
use crate::llm::client::ModelBackend;

/// Source text produced by a generation call, tagged with where it came
/// from. API outages are masked by the fallback template, so the tag is the
/// only way callers can tell the two apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedCode {
    Model(String),
    Fallback(String),
}

impl GeneratedCode {
    pub fn code(&self) -> &str {
        match self {
            GeneratedCode::Model(code) | GeneratedCode::Fallback(code) => code,
        }
    }

    pub fn into_code(self) -> String {
        match self {
            GeneratedCode::Model(code) | GeneratedCode::Fallback(code) => code,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, GeneratedCode::Fallback(_))
    }
}

/// Wraps a model backend with the degradation policy: one request, no
/// retries, and any failure is swallowed in favor of the static template.
/// `generate` therefore never fails and never returns empty source.
pub struct GenerationClient {
    backend: Option<Box<dyn ModelBackend>>,
}

impl GenerationClient {
    /// A client with no backend is permanently in fallback mode; it never
    /// attempts a network call.
    pub fn new(backend: Option<Box<dyn ModelBackend>>) -> Self {
        Self { backend }
    }

    pub fn fallback_only() -> Self {
        Self { backend: None }
    }

    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    pub async fn generate(&self, prompt: &str) -> GeneratedCode {
        let backend = match &self.backend {
            Some(backend) => backend,
            None => {
                debug!("No API credential configured, using fallback template");
                return GeneratedCode::Fallback(fallback_template());
            }
        };

        match backend.complete(prompt).await {
            Ok(raw) => {
                debug!("Model returned {} bytes of raw response", raw.len());
                GeneratedCode::Model(extract_source(&raw))
            }
            Err(err) => {
                warn!("Generation request failed, using fallback template: {:#}", err);
                GeneratedCode::Fallback(fallback_template())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{bail, Result};
    use async_trait::async_trait;

    struct CannedBackend(String);

    #[async_trait]
    impl ModelBackend for CannedBackend {
        async fn complete(&self, _prompt: &str) -> Result<String> {
            Ok(self.0.clone())
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl ModelBackend for FailingBackend {
        async fn complete(&self, _prompt: &str) -> Result<String> {
            bail!("simulated transport failure")
        }
    }

    #[tokio::test]
    async fn test_no_backend_returns_fallback_verbatim() {
        let client = GenerationClient::fallback_only();
        let result = client.generate("anything").await;
        assert!(result.is_fallback());
        assert_eq!(result.code(), fallback_template());
    }

    #[tokio::test]
    async fn test_backend_failure_returns_fallback_verbatim() {
        let client = GenerationClient::new(Some(Box::new(FailingBackend)));
        let result = client.generate("anything").await;
        assert!(result.is_fallback());
        assert_eq!(result.code(), fallback_template());
    }

    #[tokio::test]
    async fn test_backend_success_is_extracted_and_tagged_model() {
        let client = GenerationClient::new(Some(Box::new(CannedBackend(
            "```tsx\nconst x = 1\n```".to_string(),
        ))));
        let result = client.generate("anything").await;
        assert!(!result.is_fallback());
        assert_eq!(result.code(), "const x = 1");
    }

    #[tokio::test]
    async fn test_unfenced_response_passes_through_trimmed() {
        let client = GenerationClient::new(Some(Box::new(CannedBackend(
            "  const y = 2;\n".to_string(),
        ))));
        let result = client.generate("anything").await;
        assert_eq!(result, GeneratedCode::Model("const y = 2;".to_string()));
    }

    #[test]
    fn test_into_code_unwraps_both_variants() {
        assert_eq!(GeneratedCode::Model("a".into()).into_code(), "a");
        assert_eq!(GeneratedCode::Fallback("b".into()).into_code(), "b");
    }
}
