//! Configuration file loading with precedence handling.

use crate::state::{DEFAULT_PAGE_SIZE, TRACKPAD_DELTA_THRESHOLD};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Heading shown above the carousel.
pub const DEFAULT_HEADING: &str = "Editor's Pick";

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

    /// Config file contains invalid TOML syntax or unknown keys.
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
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/eventdeck/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Cards per carousel page.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Vertical wheel delta below which input counts as a trackpad gesture.
    #[serde(default)]
    pub wheel_threshold: Option<f64>,

    /// Catalog file to load when none is given on the command line.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Carousel heading text.
    #[serde(default)]
    pub heading: Option<String>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
/// `page_size` is not validated here; a zero page size is rejected when the
/// carousel is constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Cards per carousel page.
    pub page_size: usize,
    /// Trackpad heuristic threshold.
    pub wheel_threshold: f64,
    /// Catalog file; `None` means the bundled sample catalog.
    pub catalog_path: Option<PathBuf>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Carousel heading text.
    pub heading: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            wheel_threshold: TRACKPAD_DELTA_THRESHOLD,
            catalog_path: None,
            log_file_path: default_log_path(),
            heading: DEFAULT_HEADING.to_string(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/eventdeck/eventdeck.log` on Linux, or the
/// platform's state directory elsewhere. Falls back to the current
/// directory if no state directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("eventdeck").join("eventdeck.log")
    } else {
        PathBuf::from("eventdeck.log")
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

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/eventdeck/config.toml` on Linux, appropriate path on
/// other platforms. Returns `None` if no config directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("eventdeck").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `EVENTDECK_CONFIG` environment variable
/// 3. Default path `~/.config/eventdeck/config.toml`
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

    match std::env::var("EVENTDECK_CONFIG") {
        Ok(env_path) => return load_config_file(PathBuf::from(env_path)),
        Err(std::env::VarError::NotUnicode(raw)) => {
            return Err(ConfigError::InvalidPath(raw.to_string_lossy().into_owned()));
        }
        Err(std::env::VarError::NotPresent) => {}
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        page_size: config.page_size.unwrap_or(defaults.page_size),
        wheel_threshold: config.wheel_threshold.unwrap_or(defaults.wheel_threshold),
        catalog_path: config.catalog_path.or(defaults.catalog_path),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        heading: config.heading.unwrap_or(defaults.heading),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `EVENTDECK_PAGE_SIZE`: Override page size (ignored with a warning if
///   not a non-negative integer)
/// - `EVENTDECK_CATALOG`: Override catalog path
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var("EVENTDECK_PAGE_SIZE") {
        match raw.trim().parse::<usize>() {
            Ok(page_size) => config.page_size = page_size,
            Err(e) => warn!(value = %raw, error = %e, "Ignoring invalid EVENTDECK_PAGE_SIZE"),
        }
    }

    if let Ok(path) = std::env::var("EVENTDECK_CATALOG") {
        config.catalog_path = Some(PathBuf::from(path));
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
    page_size_override: Option<usize>,
    catalog_override: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(page_size) = page_size_override {
        config.page_size = page_size;
    }

    if let Some(path) = catalog_override {
        config.catalog_path = Some(path);
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
