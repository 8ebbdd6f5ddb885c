//! Provider used when no API key is configured.
//!
//! Every call fails with [`ProviderError::Unavailable`], so the pipeline
//! serves fallback content without touching the network.

use async_trait::async_trait;
use coursegen_application::{ProviderError, TextCompletionProvider};

pub struct OfflineProvider {
    reason: String,
}

impl OfflineProvider {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Default for OfflineProvider {
    fn default() -> Self {
        Self::new("offline mode")
    }
}

#[async_trait]
impl TextCompletionProvider for OfflineProvider {
    fn name(&self) -> &str {
        "offline"
    }

    async fn complete(&self, _prompt: &str) -> Result<String, ProviderError> {
        Err(ProviderError::Unavailable(self.reason.clone()))
    }
}
