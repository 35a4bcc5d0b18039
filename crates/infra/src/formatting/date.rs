//! strftime-pattern date rendering

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use younegotiate_core::DateFormatter;
use younegotiate_domain::constants::DEFAULT_DATE_FORMAT;
use younegotiate_domain::{Result, YouNegotiateError};

/// Renders dates with a validated `chrono` strftime pattern
#[derive(Debug, Clone)]
pub struct PatternDateFormatter {
    pattern: String,
}

impl PatternDateFormatter {
    /// # Errors
    /// Returns `YouNegotiateError::Config` if `pattern` contains an unknown
    /// or truncated specifier, or one a calendar date cannot fill (time of
    /// day, offsets).
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        validate_pattern(&pattern)?;
        Ok(Self { pattern })
    }

    /// The validated strftime pattern
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Default for PatternDateFormatter {
    fn default() -> Self {
        Self { pattern: DEFAULT_DATE_FORMAT.to_string() }
    }
}

impl DateFormatter for PatternDateFormatter {
    fn format(&self, date: NaiveDate) -> String {
        date.format(&self.pattern).to_string()
    }
}

/// Check a strftime pattern against a calendar date
///
/// `chrono` only reports bad specifiers when the formatted value is written,
/// and then as a `fmt::Error`. Specifiers that need a time or an offset
/// (`%H`, `%z`, ...) parse fine but fail the same way on a `NaiveDate`, so
/// the pattern is trial-rendered once here to keep rendering infallible.
pub(crate) fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        return Err(YouNegotiateError::Config("date format cannot be empty".to_string()));
    }

    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(YouNegotiateError::Config(format!("Invalid date format: {pattern}")));
    }

    let mut rendered = String::new();
    write!(rendered, "{}", NaiveDate::default().format(pattern)).map_err(|_| {
        YouNegotiateError::Config(format!("Date format needs more than a calendar date: {pattern}"))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 5).unwrap()
    }

    #[test]
    fn default_is_us_style() {
        assert_eq!(PatternDateFormatter::default().format(date()), "04/05/2024");
    }

    #[test]
    fn custom_pattern() {
        let formatter = PatternDateFormatter::new("%b %-d, %Y").unwrap();
        assert_eq!(formatter.format(date()), "Apr 5, 2024");
    }

    #[test]
    fn rejects_unknown_specifier() {
        assert!(PatternDateFormatter::new("%Q").is_err());
        assert!(PatternDateFormatter::new("").is_err());
    }

    #[test]
    fn rejects_time_specifier() {
        for pattern in ["%Y-%m-%d %H:%M", "%m/%d/%Y %z", "%T"] {
            let err = PatternDateFormatter::new(pattern).unwrap_err();
            assert!(matches!(err, YouNegotiateError::Config(_)), "{pattern}: {err:?}");
        }
    }

    #[test]
    fn accepts_every_date_specifier() {
        let formatter = PatternDateFormatter::new("%A %e %B %y (%j, week %V)").unwrap();
        assert_eq!(formatter.format(date()), "Friday  5 April 24 (096, week 14)");
    }
}
