//! Gemini HTTP adapter

use super::GeminiConfig;
use super::types::{GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use coursegen_application::{ProviderError, TextCompletionProvider};
use coursegen_domain::util::truncate_str;
use tracing::{debug, info, warn};

/// Maximum number of error-body bytes kept in [`ProviderError::Status`].
const MAX_ERROR_BODY: usize = 500;

pub struct GeminiProvider {
    client: reqwest::Client,
    config: GeminiConfig,
    endpoint: String,
}

impl GeminiProvider {
    /// Create a provider with its own HTTP client.
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("coursegen/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProviderError::Other(format!("Failed to build HTTP client: {}", e)))?;

        info!(model = %config.model, "Gemini provider initialized");
        Ok(Self::with_client(client, config))
    }

    /// Create a provider sharing an existing HTTP client.
    pub fn with_client(client: reqwest::Client, config: GeminiConfig) -> Self {
        let endpoint = config.endpoint();
        Self {
            client,
            config,
            endpoint,
        }
    }
}

/// Map a transport-level reqwest error. The URL is stripped because it carries the key.
fn request_error(error: reqwest::Error) -> ProviderError {
    if error.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::Connection(error.without_url().to_string())
    }
}

#[async_trait]
impl TextCompletionProvider for GeminiProvider {
    fn name(&self) -> &str {
        &self.config.model
    }

    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let body = GenerateContentRequest::user_prompt(prompt, self.config.generation.clone());

        debug!(model = %self.config.model, prompt_bytes = prompt.len(), "POST generateContent");
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: truncate_str(&text, MAX_ERROR_BODY).to_string(),
            });
        }

        let payload: GenerateContentResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout
            } else {
                ProviderError::InvalidResponse(e.without_url().to_string())
            }
        })?;

        match payload.first_text() {
            Some(text) => Ok(text.to_string()),
            None => {
                warn!(
                    finish_reason = payload.finish_reason().unwrap_or("none"),
                    "Response carried no candidate text"
                );
                Err(ProviderError::EmptyResponse)
            }
        }
    }
}
