//! Retrying transport
//!
//! Wraps a [`TextCompletionProvider`] with bounded attempts, linear backoff
//! and a per-attempt timeout. Exhaustion is reported as a value, never a panic.

use crate::config::RetryPolicy;
use crate::ports::completion_provider::{ProviderError, TextCompletionProvider};
use crate::ports::progress::{GenerationProgress, NoProgress};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Why the transport gave up.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    #[error("Provider failed after {attempts} attempt(s): {last_error}")]
    Exhausted { attempts: u32, last_error: String },

    #[error("Cancelled after {attempts} attempt(s)")]
    Cancelled { attempts: u32 },
}

impl TransportFailure {
    /// Number of provider calls that were started.
    pub fn attempts(&self) -> u32 {
        match self {
            TransportFailure::Exhausted { attempts, .. } => *attempts,
            TransportFailure::Cancelled { attempts } => *attempts,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, TransportFailure::Cancelled { .. })
    }
}

/// Provider handle plus retry policy.
#[derive(Clone)]
pub struct RetryingTransport {
    provider: Arc<dyn TextCompletionProvider>,
    policy: RetryPolicy,
}

impl RetryingTransport {
    pub fn new(provider: Arc<dyn TextCompletionProvider>, policy: RetryPolicy) -> Self {
        Self { provider, policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Send `prompt`, retrying failed attempts.
    pub async fn call(&self, prompt: &str) -> Result<String, TransportFailure> {
        self.call_with_progress(prompt, None, &NoProgress).await
    }

    /// Like [`call`](Self::call), but stops as soon as `token` is cancelled.
    ///
    /// Cancellation aborts the in-flight attempt or backoff sleep.
    pub async fn call_with_cancellation(
        &self,
        prompt: &str,
        token: &CancellationToken,
    ) -> Result<String, TransportFailure> {
        self.call_with_progress(prompt, Some(token), &NoProgress)
            .await
    }

    pub async fn call_with_progress(
        &self,
        prompt: &str,
        cancellation: Option<&CancellationToken>,
        progress: &dyn GenerationProgress,
    ) -> Result<String, TransportFailure> {
        let max_attempts = self.policy.max_attempts();
        let provider = self.provider.name();
        let mut last_error = String::new();

        for attempt in 1..=max_attempts {
            if cancellation.is_some_and(CancellationToken::is_cancelled) {
                return Err(TransportFailure::Cancelled {
                    attempts: attempt - 1,
                });
            }

            debug!(provider, attempt, max_attempts, "Sending prompt");
            let Some(result) = self.attempt(prompt, cancellation).await else {
                return Err(TransportFailure::Cancelled { attempts: attempt });
            };

            match result {
                Ok(text) => {
                    debug!(provider, attempt, bytes = text.len(), "Provider responded");
                    return Ok(text);
                }
                Err(error) => {
                    warn!(provider, attempt, max_attempts, error = %error, "Provider attempt failed");
                    progress.on_attempt_failed(attempt, max_attempts, &error);
                    last_error = error.to_string();
                }
            }

            if attempt < max_attempts {
                let delay = self.policy.backoff(attempt);
                debug!(provider, attempt, delay_ms = delay.as_millis() as u64, "Backing off");
                if !sleep_unless_cancelled(delay, cancellation).await {
                    return Err(TransportFailure::Cancelled { attempts: attempt });
                }
            }
        }

        warn!(provider, attempts = max_attempts, last_error = %last_error, "Retries exhausted");
        Err(TransportFailure::Exhausted {
            attempts: max_attempts,
            last_error,
        })
    }

    /// One timed provider call. `None` means the call was cancelled.
    async fn attempt(
        &self,
        prompt: &str,
        cancellation: Option<&CancellationToken>,
    ) -> Option<Result<String, ProviderError>> {
        let call = async {
            match tokio::time::timeout(self.policy.timeout, self.provider.complete(prompt)).await {
                Ok(result) => result,
                Err(_) => Err(ProviderError::Timeout),
            }
        };

        match cancellation {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => None,
                result = call => Some(result),
            },
            None => Some(call.await),
        }
    }
}

/// Returns `false` if the sleep was interrupted by cancellation.
async fn sleep_unless_cancelled(delay: Duration, cancellation: Option<&CancellationToken>) -> bool {
    match cancellation {
        Some(token) => tokio::select! {
            biased;
            _ = token.cancelled() => false,
            _ = tokio::time::sleep(delay) => true,
        },
        None => {
            tokio::time::sleep(delay).await;
            true
        }
    }
}
