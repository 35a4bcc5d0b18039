//! Display-ready offer terms

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/// Resolved offer terms rendered as strings
///
/// Unset terms carry the configured placeholder (e.g. `N/A`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct OfferView {
    /// Short description of the accepted terms
    pub terms_label: String,
    /// Formatted recurring or settlement amount
    pub amount: String,
    /// Formatted payoff balance
    pub payoff_balance: String,
    /// Formatted first payment date
    pub payment_date: String,
    /// Whether an offer was accepted
    pub resolved: bool,
}
