//! Configuration file loading with precedence handling.
//!
//! Precedence, lowest to highest: hardcoded defaults, config file,
//! environment variables, CLI arguments. A missing config file is not an
//! error; defaults apply.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read an existing config file.
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields optional; unset fields fall back to hardcoded defaults.
/// Corresponds to `~/.config/hexsift/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Startup layout name ("hex" or "smart").
    #[serde(default)]
    pub layout: Option<String>,

    /// Size of the generated demo buffer when no input file is given.
    #[serde(default)]
    pub sample_size: Option<usize>,

    /// Path to the log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Startup layout name.
    pub layout: String,
    /// Demo buffer size.
    pub sample_size: usize,
    /// Path to the log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            layout: "hex".to_string(),
            sample_size: 4096,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve the default log file path.
///
/// `~/.local/state/hexsift/hexsift.log` on Unix-like systems, falling
/// back to the current directory when no state directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("hexsift").join("hexsift.log")
    } else {
        PathBuf::from("hexsift.log")
    }
}

/// Resolve the default config file path, `None` when the platform config
/// directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hexsift").join("config.toml"))
}

/// Load a configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist.
///
/// # Errors
///
/// Returns an error only when the file exists but cannot be read or
/// parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with path precedence: explicit argument, then the
/// `HEXSIFT_CONFIG` environment variable, then the default path.
///
/// # Errors
///
/// Returns an error only if a config file exists but cannot be read or
/// parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("HEXSIFT_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge a loaded config file into the defaults.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        layout: config.layout.unwrap_or(defaults.layout),
        sample_size: config.sample_size.unwrap_or(defaults.sample_size),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides: `HEXSIFT_LAYOUT` overrides the
/// startup layout.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(layout) = std::env::var("HEXSIFT_LAYOUT") {
        config.layout = layout;
    }
    config
}

/// Apply CLI argument overrides; these have the highest precedence and
/// are only applied for flags the user actually passed.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    layout_override: Option<String>,
    sample_size_override: Option<usize>,
) -> ResolvedConfig {
    if let Some(layout) = layout_override {
        config.layout = layout;
    }
    if let Some(sample_size) = sample_size_override {
        config.sample_size = sample_size;
    }
    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
