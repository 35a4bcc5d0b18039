//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If none are set, falls back to loading from file
//! 3. If no file exists either, uses built-in defaults
//!
//! ## Environment Variables
//! - `YOUNEGOTIATE_CURRENCY_SYMBOL`: Symbol prefixed to amounts
//! - `YOUNEGOTIATE_DATE_FORMAT`: strftime pattern for payment dates
//! - `YOUNEGOTIATE_PLACEHOLDER`: Text shown for unresolved terms
//! - `YOUNEGOTIATE_LOG_FILTER`: `EnvFilter` directives
//! - `YOUNEGOTIATE_LOG_JSON`: Emit JSON logs (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./younegotiate.json` or `./younegotiate.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};

use younegotiate_domain::{Config, Result, YouNegotiateError};

use crate::errors::InfraError;
use crate::formatting::date::validate_pattern;

const ENV_CURRENCY_SYMBOL: &str = "YOUNEGOTIATE_CURRENCY_SYMBOL";
const ENV_DATE_FORMAT: &str = "YOUNEGOTIATE_DATE_FORMAT";
const ENV_PLACEHOLDER: &str = "YOUNEGOTIATE_PLACEHOLDER";
const ENV_LOG_FILTER: &str = "YOUNEGOTIATE_LOG_FILTER";
const ENV_LOG_JSON: &str = "YOUNEGOTIATE_LOG_JSON";

const ENV_KEYS: [&str; 5] =
    [ENV_CURRENCY_SYMBOL, ENV_DATE_FORMAT, ENV_PLACEHOLDER, ENV_LOG_FILTER, ENV_LOG_JSON];

/// Load configuration with automatic fallback strategy
///
/// Environment variables take precedence; then a config file; then
/// defaults.
///
/// # Errors
/// Returns `YouNegotiateError::Config` if a source exists but is invalid.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            match probe_config_paths() {
                Some(path) => load_from_file(Some(path)),
                None => {
                    tracing::info!("No configuration found, using defaults");
                    Ok(Config::default())
                }
            }
        }
    }
}

/// Load configuration from environment variables
///
/// Unset variables keep their default values, but at least one of the
/// variables must be present.
///
/// # Errors
/// Returns `YouNegotiateError::Config` if no variable is set or a value is
/// invalid.
pub fn load_from_env() -> Result<Config> {
    if !ENV_KEYS.iter().any(|key| std::env::var(key).is_ok()) {
        return Err(YouNegotiateError::Config(
            "No YOUNEGOTIATE_* environment variables set".to_string(),
        ));
    }

    let mut config = Config::default();

    if let Some(symbol) = env_opt(ENV_CURRENCY_SYMBOL) {
        config.display.currency_symbol = symbol;
    }
    if let Some(pattern) = env_opt(ENV_DATE_FORMAT) {
        config.display.date_format = pattern;
    }
    if let Some(placeholder) = env_opt(ENV_PLACEHOLDER) {
        config.display.unresolved_placeholder = placeholder;
    }
    if let Some(filter) = env_opt(ENV_LOG_FILTER) {
        config.logging.filter = filter;
    }
    config.logging.json = env_bool(ENV_LOG_JSON, config.logging.json);

    validate(&config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `YouNegotiateError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(YouNegotiateError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            YouNegotiateError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path).map_err(InfraError::from)?;

    let config = parse_config(&contents, &config_path)?;
    validate(&config)?;
    Ok(config)
}

/// Reject configurations that would fail later at render time
///
/// # Errors
/// Returns `YouNegotiateError::Config` for an invalid date pattern or an
/// empty log filter.
pub fn validate(config: &Config) -> Result<()> {
    validate_pattern(&config.display.date_format)?;

    if config.logging.filter.trim().is_empty() {
        return Err(YouNegotiateError::Config("logging.filter cannot be empty".to_string()));
    }

    Ok(())
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => Ok(toml::from_str(contents).map_err(InfraError::from)?),
        "json" => Ok(serde_json::from_str(contents).map_err(InfraError::from)?),
        _ => Err(YouNegotiateError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidate_files(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidate_files(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidate_files(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("younegotiate.json"),
        dir.join("younegotiate.toml"),
        dir.join("../config.json"),
        dir.join("../config.toml"),
        dir.join("../../config.json"),
        dir.join("../../config.toml"),
    ]
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map_or(default, |s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}
