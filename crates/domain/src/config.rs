//! Configuration structures
//!
//! Loaded by `younegotiate-infra::config`. Every field has a default so a
//! partial file (or no file at all) still yields a usable configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CURRENCY_SYMBOL, DEFAULT_DATE_FORMAT, DEFAULT_LOG_FILTER, UNRESOLVED_PLACEHOLDER,
};

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Rendering of amounts, dates and placeholders
    #[serde(default)]
    pub display: DisplayConfig,
    /// Tracing output
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How resolved offer terms are rendered for dashboards and agreements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Symbol prefixed to formatted amounts
    pub currency_symbol: String,
    /// `chrono` strftime pattern for payment dates
    pub date_format: String,
    /// Rendered in place of any unset term
    pub unresolved_placeholder: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            unresolved_placeholder: UNRESOLVED_PLACEHOLDER.to_string(),
        }
    }
}

/// Tracing subscriber settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive string, e.g. `info,younegotiate_core=debug`
    pub filter: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: DEFAULT_LOG_FILTER.to_string(), json: false }
    }
}
