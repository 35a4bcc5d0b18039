//! Payment schedule types
//!
//! A projection of the concrete payments implied by resolved offer terms.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::negotiation::{AcceptedTerms, NegotiationType};

/// One projected payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ScheduledPayment {
    /// 1-based position in the schedule
    pub sequence: u32,
    /// Date the payment falls due
    pub due_date: NaiveDate,
    /// Amount due; the last payment carries any remainder
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub amount: Decimal,
}

/// Every payment needed to satisfy the payoff balance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct PaymentSchedule {
    /// Pay-in-full or installment
    pub negotiation_type: NegotiationType,
    /// Side whose terms were projected
    pub accepted_terms: AcceptedTerms,
    /// Payments in due-date order
    pub installments: Vec<ScheduledPayment>,
    /// Sum of all installments; equals the resolved payoff balance
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub total: Decimal,
}

impl PaymentSchedule {
    /// Due date of the last payment
    pub fn final_due_date(&self) -> Option<NaiveDate> {
        self.installments.last().map(|payment| payment.due_date)
    }

    /// Number of scheduled payments
    pub fn installment_count(&self) -> usize {
        self.installments.len()
    }
}
