//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Prefix for environment overrides, e.g. `COURSEGEN_RETRY__MAX_RETRIES=3`.
pub const ENV_PREFIX: &str = "COURSEGEN_";

/// Project-level config file names, checked in order.
const PROJECT_FILES: [&str; 2] = ["coursegen.toml", ".coursegen.toml"];

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error(transparent)]
    Figment(#[from] Box<figment::Error>),
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `COURSEGEN_`-prefixed environment variables (`__` separates nesting)
    /// 2. Explicit config path (if provided; must exist)
    /// 3. Project root: `./coursegen.toml` or `./.coursegen.toml`
    /// 4. Global: `<config dir>/coursegen/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, ConfigLoadError> {
        if let Some(path) = config_path
            && !path.exists()
        {
            return Err(ConfigLoadError::NotFound(path.clone()));
        }

        let mut files = Vec::new();
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            files.push(global_path);
        }
        if let Some(project_path) = Self::project_config_path() {
            files.push(project_path);
        }
        if let Some(path) = config_path {
            files.push(path.clone());
        }

        Self::figment(&files)
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| ConfigLoadError::Figment(Box::new(e)))
    }

    /// Defaults merged with the given files only, later files winning.
    #[cfg(test)]
    fn load_files(files: &[PathBuf]) -> Result<FileConfig, ConfigLoadError> {
        if let Some(missing) = files.iter().find(|p| !p.exists()) {
            return Err(ConfigLoadError::NotFound(missing.clone()));
        }
        Self::figment(files)
            .extract()
            .map_err(|e| ConfigLoadError::Figment(Box::new(e)))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn figment(files: &[PathBuf]) -> Figment {
        files.iter().fold(
            Figment::new().merge(Serialized::defaults(FileConfig::default())),
            |figment, path| {
                debug!(path = %path.display(), "Merging config file");
                figment.merge(Toml::file(path))
            },
        )
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/coursegen/config.toml if set,
    /// otherwise the platform config directory equivalent.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("coursegen").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::project_config_in(Path::new("."))
    }

    fn project_config_in(dir: &Path) -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Describe the config file locations being used (for --show-config)
    pub fn describe_sources(explicit: Option<&PathBuf>) -> String {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        lines.push(format!("  [ENV  ] Environment: {}*", ENV_PREFIX));

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            lines.push(format!("  [{:<5}] Explicit: {}", mark, path.display()));
        }

        match Self::project_config_path() {
            Some(path) => lines.push(format!("  [FOUND] Project: {}", path.display())),
            None => lines.push("  [     ] Project: ./coursegen.toml or ./.coursegen.toml".to_string()),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{}] Global:  {}", mark, path.display()));
        }

        lines.push("  [     ] Default: built-in defaults".to_string());
        lines.join("\n")
    }
}
