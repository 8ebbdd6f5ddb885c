//! Infrastructure layer for coursegen
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoadError, ConfigLoader, ConfigValidationError, FileConfig, FileCourseConfig,
    FileOutputConfig, FileProviderConfig, FileRetryConfig,
};
pub use providers::{
    gemini::{GeminiConfig, GeminiProvider},
    offline::OfflineProvider,
};
