//! Text completion port
//!
//! Defines the interface for sending a prompt to a generative text API.

use async_trait::async_trait;
use thiserror::Error;

/// Errors a provider can report for a single request.
///
/// Every variant is retryable from the transport's point of view.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timed out")]
    Timeout,

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Response contained no candidate text")]
    EmptyResponse,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// A generative text API that answers one prompt with one block of text.
///
/// Implementations (adapters) live in the infrastructure layer. A call makes
/// exactly one upstream request; retries belong to the caller.
#[async_trait]
pub trait TextCompletionProvider: Send + Sync {
    /// Short identifier used in logs (e.g. `gemini-1.5-flash`)
    fn name(&self) -> &str;

    /// Send `prompt` and return the first candidate's text
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}
