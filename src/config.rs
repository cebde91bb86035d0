use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Gemini model identifier used for UI generation
    pub model: String,

    /// Environment variable holding the API key. A missing variable is a
    /// normal condition: the pipeline runs in fallback mode without it.
    pub api_key_env: String,

    /// Override the API base URL (used by tests against a local mock server)
    #[serde(default)]
    pub base_url: Option<String>,

    /// Optional: override maxOutputTokens for generation requests
    #[serde(default)]
    pub max_output_tokens: Option<u32>,
}

impl LlmConfig {
    /// Get the maxOutputTokens value, using the system default if not set
    pub fn get_max_output_tokens(&self) -> u32 {
        self.max_output_tokens.unwrap_or(8192)
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            base_url: None,
            max_output_tokens: None,
        }
    }
}

impl Config {
    /// Load config from the working directory or the user config directory
    #[allow(dead_code)]
    pub fn load() -> Result<Self> {
        Self::load_with_path(None)
    }

    /// Load configuration from a specific path, or use default search paths
    pub fn load_with_path(path: Option<String>) -> Result<Self> {
        // If explicit path provided, use it
        if let Some(config_path) = path {
            debug!("Loading config from explicit path: {}", config_path);
            return Self::load_from_path(&config_path);
        }

        // Try working directory first (per-project config)
        if let Ok(config) = Self::load_from_path("uiforge.toml") {
            debug!("Loaded config from ./uiforge.toml");
            return Ok(config);
        }

        // Try user config directory
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("uiforge").join("config.toml");
            if let Ok(config) = Self::load_from_path(&config_path) {
                debug!("Loaded config from {:?}", config_path);
                return Ok(config);
            }
        }

        // Return defaults
        debug!("Using default config");
        Ok(Self::default())
    }

    fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve the API key from the configured environment variable.
    /// `None` means the pipeline stays in fallback mode for its lifetime.
    pub fn resolve_api_key(&self) -> Option<String> {
        match env::var(&self.llm.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Some(key),
            _ => {
                debug!(
                    "No API key in {}; generation will use the fallback template",
                    self.llm.api_key_env
                );
                None
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm: LlmConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.llm.model, "gemini-2.0-flash");
        assert_eq!(config.llm.api_key_env, "GEMINI_API_KEY");
        assert!(config.llm.base_url.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("model = \"gemini-2.0-flash\""));
        assert!(toml_str.contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_config_roundtrip_with_overrides() {
        let toml_str = r#"
[llm]
model = "gemini-1.5-pro"
api_key_env = "MY_KEY"
base_url = "http://localhost:9999"
max_output_tokens = 2048
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.llm.model, "gemini-1.5-pro");
        assert_eq!(config.llm.api_key_env, "MY_KEY");
        assert_eq!(config.llm.base_url.as_deref(), Some("http://localhost:9999"));
        assert_eq!(config.llm.get_max_output_tokens(), 2048);
    }

    #[test]
    fn test_max_output_tokens_default() {
        let llm = LlmConfig::default();
        assert_eq!(llm.get_max_output_tokens(), 8192);
    }

    #[test]
    #[serial]
    fn test_resolve_api_key_present() {
        env::set_var("UIFORGE_TEST_KEY_PRESENT", "key_123");
        let mut config = Config::default();
        config.llm.api_key_env = "UIFORGE_TEST_KEY_PRESENT".to_string();
        assert_eq!(config.resolve_api_key(), Some("key_123".to_string()));
        env::remove_var("UIFORGE_TEST_KEY_PRESENT");
    }

    #[test]
    #[serial]
    fn test_resolve_api_key_missing_is_none_not_error() {
        let mut config = Config::default();
        config.llm.api_key_env = "UIFORGE_TEST_NONEXISTENT_KEY_99999".to_string();
        assert_eq!(config.resolve_api_key(), None);
    }

    #[test]
    #[serial]
    fn test_resolve_api_key_blank_is_none() {
        env::set_var("UIFORGE_TEST_KEY_BLANK", "   ");
        let mut config = Config::default();
        config.llm.api_key_env = "UIFORGE_TEST_KEY_BLANK".to_string();
        assert_eq!(config.resolve_api_key(), None);
        env::remove_var("UIFORGE_TEST_KEY_BLANK");
    }
}
