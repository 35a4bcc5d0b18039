//! Portfolio summary types
//!
//! Aggregated negotiated terms for a creditor's dashboard.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/// Totals across a company's negotiations
///
/// Only resolved negotiations contribute to the counts by type and to the
/// monetary totals. Unset amounts are skipped rather than counted as zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct PortfolioSummary {
    /// Every negotiation considered
    pub total_negotiations: u32,
    /// Negotiations with accepted terms
    pub resolved_count: u32,
    /// Negotiations with no accepted terms
    pub unresolved_count: u32,

    /// Resolved pay-in-full negotiations
    pub pay_in_full_count: u32,
    /// Resolved installment negotiations
    pub installment_count: u32,
    /// Resolved through the consumer's counter-offer
    pub counter_offer_count: u32,

    /// Sum of resolved payoff balances
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub total_payoff_balance: Decimal,
    /// Sum of resolved pay-in-full settlement amounts
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub total_settlement_amount: Decimal,
    /// Sum of resolved per-installment amounts
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub total_recurring_amount: Decimal,

    /// Earliest resolved payment date
    pub next_payment_date: Option<NaiveDate>,
}
