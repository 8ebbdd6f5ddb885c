//! Configuration file loading for coursegen
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables: `COURSEGEN_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./coursegen.toml` or `./.coursegen.toml`
//! 4. Global: `$XDG_CONFIG_HOME/coursegen/config.toml` (or the platform equivalent)
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileCourseConfig, FileOutputConfig, FileProviderConfig,
    FileRetryConfig,
};
pub use loader::{ConfigLoadError, ConfigLoader};
