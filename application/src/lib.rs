//! Application layer for coursegen
//!
//! This crate contains the generation use cases, port definitions, and
//! pipeline configuration. It depends only on the domain layer and on async
//! primitives; provider adapters live in the infrastructure layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{PipelineConfig, RetryPolicy};
pub use ports::{
    completion_provider::{ProviderError, TextCompletionProvider},
    progress::{GenerationProgress, NoProgress, PipelineStage},
};
pub use use_cases::ai_service::AiService;
pub use use_cases::retrying_transport::{RetryingTransport, TransportFailure};
