//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`RetryPolicy`] — attempt count, linear backoff and per-attempt timeout
//! - [`PipelineConfig`] — everything [`AiService`](crate::AiService) needs besides the provider

pub mod pipeline_config;

pub use pipeline_config::{PipelineConfig, RetryPolicy};
