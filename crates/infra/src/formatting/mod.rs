//! Formatter adapters for the core display ports

pub mod currency;
pub mod date;

pub use currency::UsdCurrencyFormatter;
pub use date::PatternDateFormatter;
