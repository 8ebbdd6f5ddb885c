//! Provider configuration from TOML (`[provider]` section)

use crate::providers::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiConfig, GenerationConfig};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::ConfigValidationError;

/// Gemini API provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Model name (default: "gemini-1.5-flash").
    pub model: String,
    /// Base URL for the Gemini REST API.
    pub base_url: String,
    /// Environment variable name for the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended; use the env var instead).
    pub api_key: Option<String>,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub top_p: f32,
    pub top_k: u32,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        let generation = GenerationConfig::default();
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            temperature: generation.temperature,
            max_output_tokens: generation.max_output_tokens,
            top_p: generation.top_p,
            top_k: generation.top_k,
        }
    }
}

impl FileProviderConfig {
    /// API key from `api_key`, else from the environment variable named by `api_key_env`.
    ///
    /// Blank values count as missing.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    fn resolve_api_key_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| lookup(&self.api_key_env).filter(|key| !key.trim().is_empty()))
            .map(|key| key.trim().to_string())
    }

    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
            top_p: self.top_p,
            top_k: self.top_k,
        }
    }

    /// Build the Gemini client config, failing if no API key is available.
    pub fn to_gemini_config(&self, timeout: Duration) -> Result<GeminiConfig, ConfigValidationError> {
        if self.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }
        let api_key = self
            .resolve_api_key()
            .ok_or_else(|| ConfigValidationError::MissingApiKey {
                env: self.api_key_env.clone(),
            })?;

        Ok(GeminiConfig::new(api_key)
            .with_model(self.model.trim())
            .with_base_url(self.base_url.clone())
            .with_generation(self.generation_config())
            .with_timeout(timeout))
    }
}
