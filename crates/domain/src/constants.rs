//! Application constants
//!
//! Centralized location for domain-level constants used throughout the
//! workspace.

// Display defaults
/// Symbol prefixed to formatted amounts
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";
/// US-style `MM/DD/YYYY` payment dates
pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";
/// Shown in place of unset terms
pub const UNRESOLVED_PLACEHOLDER: &str = "N/A";

// Logging defaults
/// `EnvFilter` directive used when none is configured
pub const DEFAULT_LOG_FILTER: &str = "info";

// Schedule projection
/// Plans needing more payments than this are not projected (50 years monthly)
pub const MAX_SCHEDULED_INSTALLMENTS: u32 = 600;
/// Days between weekly payments
pub const WEEKLY_INTERVAL_DAYS: u64 = 7;
/// Days between biweekly payments
pub const BIWEEKLY_INTERVAL_DAYS: u64 = 14;

// Monetary precision (cents)
/// Decimal places kept when rendering amounts
pub const CURRENCY_SCALE: u32 = 2;
