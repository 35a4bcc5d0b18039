//! US-style currency rendering: `$1,234.50`, `-$75.00`

use rust_decimal::{Decimal, RoundingStrategy};
use younegotiate_core::CurrencyFormatter;
use younegotiate_domain::constants::{CURRENCY_SCALE, DEFAULT_CURRENCY_SYMBOL};

/// Symbol prefix, comma thousands separators, two decimal places
#[derive(Debug, Clone)]
pub struct UsdCurrencyFormatter {
    symbol: String,
}

impl UsdCurrencyFormatter {
    /// Formatter prefixing amounts with `symbol`
    pub fn new(symbol: impl Into<String>) -> Self {
        Self { symbol: symbol.into() }
    }
}

impl Default for UsdCurrencyFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_SYMBOL)
    }
}

impl CurrencyFormatter for UsdCurrencyFormatter {
    fn format(&self, amount: Decimal) -> String {
        let rounded =
            amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };

        let fixed = format!("{:.2}", rounded.abs());
        let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        format!("{sign}{}{}.{cents}", self.symbol, group_thousands(whole))
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
