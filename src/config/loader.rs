//! Configuration file loading with precedence handling.

use crate::model::FilterOption;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV_VAR: &str = "RHYMEFINDER_CONFIG";

/// Environment variable overriding the initial filter.
pub const FILTER_ENV_VAR: &str = "RHYMEFINDER_FILTER";

/// Smallest allowed card height (two border rows plus one content row).
pub const MIN_CARD_HEIGHT: u16 = 3;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A filter name that is not one of the menu options.
    #[error("Invalid filter in {path}: {reason}")]
    InvalidFilter {
        /// Path of the offending file.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/rhymefinder/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Initial part-of-speech filter ("all", "noun", "verb", "adjective").
    #[serde(default)]
    pub filter: Option<String>,

    /// Number of card columns in the results grid.
    #[serde(default)]
    pub columns: Option<u16>,

    /// Height of one result card in rows, borders included.
    #[serde(default)]
    pub card_height: Option<u16>,

    /// Minimum scrollbar thumb length in rows.
    #[serde(default)]
    pub min_thumb_extent: Option<u16>,

    /// Rows scrolled per mouse wheel notch.
    #[serde(default)]
    pub wheel_step: Option<u16>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Initial filter; `None` shows the "Filter" placeholder.
    pub filter: Option<FilterOption>,
    /// Card columns (at least 1).
    pub columns: u16,
    /// Card height in rows (at least [`MIN_CARD_HEIGHT`]).
    pub card_height: u16,
    /// Minimum scrollbar thumb length in rows (at least 1).
    pub min_thumb_extent: u16,
    /// Rows per wheel notch (at least 1).
    pub wheel_step: u16,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            filter: None,
            columns: 3,
            card_height: 6,
            min_thumb_extent: 2,
            wheel_step: 3,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Clamp numeric settings into their valid ranges.
    pub fn normalized(mut self) -> Self {
        self.columns = self.columns.max(1);
        self.card_height = self.card_height.max(MIN_CARD_HEIGHT);
        self.min_thumb_extent = self.min_thumb_extent.max(1);
        self.wheel_step = self.wheel_step.max(1);
        self
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/rhymefinder/rhymefinder.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("rhymefinder").join("rhymefinder.log")
    } else {
        PathBuf::from("rhymefinder.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
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

    if let Some(filter) = &config.filter {
        filter
            .parse::<FilterOption>()
            .map_err(|e| ConfigError::InvalidFilter {
                path: path.clone(),
                reason: e.to_string(),
            })?;
    }

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/rhymefinder/config.toml` on Unix, appropriate path on
/// other platforms. Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rhymefinder").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `RHYMEFINDER_CONFIG` environment variable
/// 3. Default path `~/.config/rhymefinder/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        if env_path.trim().is_empty() {
            return Err(ConfigError::InvalidPath(env_path));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use
/// the default. Filter names were validated when the file was loaded; an
/// unparseable one here falls back to the default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        filter: config
            .filter
            .and_then(|f| f.parse().ok())
            .or(defaults.filter),
        columns: config.columns.unwrap_or(defaults.columns),
        card_height: config.card_height.unwrap_or(defaults.card_height),
        min_thumb_extent: config.min_thumb_extent.unwrap_or(defaults.min_thumb_extent),
        wheel_step: config.wheel_step.unwrap_or(defaults.wheel_step),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
    .normalized()
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `RHYMEFINDER_FILTER`: override the initial filter (ignored if invalid)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(filter) = std::env::var(FILTER_ENV_VAR) {
        match filter.parse() {
            Ok(option) => config.filter = Some(option),
            Err(e) => tracing::warn!(error = %e, "Ignoring {}", FILTER_ENV_VAR),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    filter_override: Option<FilterOption>,
    min_thumb_override: Option<u16>,
) -> ResolvedConfig {
    if let Some(filter) = filter_override {
        config.filter = Some(filter);
    }

    if let Some(min_thumb) = min_thumb_override {
        config.min_thumb_extent = min_thumb;
    }

    config.normalized()
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
