//! Negotiation records and resolved offer terms
//!
//! A `NegotiationRecord` is the snapshot of a consumer's negotiation as the
//! data layer hands it over: the creditor's original terms, the consumer's
//! counter terms, and which side (if any) was accepted. It is read-only here.
//! `ResolvedOffer` is derived from it on every read and never persisted.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_domain_status_conversions;

/* -------------------------------------------------------------------------- */
/* Enums */
/* -------------------------------------------------------------------------- */

/// How the negotiated debt is paid off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum NegotiationType {
    /// Single lump-sum settlement
    PayInFull,
    /// Recurring payment plan
    Installment,
}

impl_domain_status_conversions!(NegotiationType {
    PayInFull => "pif",
    Installment => "installment",
});

/// Spacing between installment payments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum InstallmentFrequency {
    /// Every 7 days
    Weekly,
    /// Every 14 days
    Biweekly,
    /// Same day each calendar month
    #[default]
    Monthly,
}

impl_domain_status_conversions!(InstallmentFrequency {
    Weekly => "weekly",
    Biweekly => "biweekly",
    Monthly => "monthly",
});

/// Which side's terms were accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum AcceptedTerms {
    /// The consumer accepted the creditor's original offer
    Original,
    /// The creditor accepted the consumer's counter-offer
    Counter,
}

/* -------------------------------------------------------------------------- */
/* Negotiation Record */
/* -------------------------------------------------------------------------- */

/// Negotiated terms for one consumer account
///
/// Monetary fields are optional: not every offer populates every branch, and
/// an unset amount must stay distinct from an amount of zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct NegotiationRecord {
    /// Consumer the negotiation belongs to
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub consumer_id: u64,
    /// Creditor company holding the account
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub company_id: u64,
    /// Pay-in-full or installment
    pub negotiation_type: NegotiationType,
    /// Payment spacing for installment plans
    #[serde(default)]
    pub installment_frequency: InstallmentFrequency,

    /// Consumer accepted the creditor's original offer
    #[serde(default)]
    pub offer_accepted: bool,
    /// Creditor accepted the consumer's counter-offer
    #[serde(default)]
    pub counter_offer_accepted: bool,

    // Pay-in-full terms
    /// Creditor's lump-sum settlement amount
    #[cfg_attr(feature = "ts-gen", ts(type = "string | null"))]
    pub one_time_settlement_amount: Option<Decimal>,
    /// Consumer's proposed lump-sum amount
    #[cfg_attr(feature = "ts-gen", ts(type = "string | null"))]
    pub counter_one_time_amount: Option<Decimal>,

    /// First payment date of the original offer
    pub first_payment_date: Option<NaiveDate>,
    /// First payment date of the counter-offer
    pub counter_first_payment_date: Option<NaiveDate>,

    // Installment terms
    /// Creditor's recurring installment amount
    #[cfg_attr(feature = "ts-gen", ts(type = "string | null"))]
    pub monthly_amount: Option<Decimal>,
    /// Consumer's proposed recurring amount
    #[cfg_attr(feature = "ts-gen", ts(type = "string | null"))]
    pub counter_monthly_amount: Option<Decimal>,
    /// Creditor's payoff balance for the plan
    #[cfg_attr(feature = "ts-gen", ts(type = "string | null"))]
    pub negotiated_amount: Option<Decimal>,
    /// Consumer's proposed payoff balance
    #[cfg_attr(feature = "ts-gen", ts(type = "string | null"))]
    pub counter_negotiated_amount: Option<Decimal>,
}

impl NegotiationRecord {
    /// Create a record with no accepted side and no terms populated
    pub fn new(consumer_id: u64, company_id: u64, negotiation_type: NegotiationType) -> Self {
        Self {
            consumer_id,
            company_id,
            negotiation_type,
            installment_frequency: InstallmentFrequency::default(),
            offer_accepted: false,
            counter_offer_accepted: false,
            one_time_settlement_amount: None,
            counter_one_time_amount: None,
            first_payment_date: None,
            counter_first_payment_date: None,
            monthly_amount: None,
            counter_monthly_amount: None,
            negotiated_amount: None,
            counter_negotiated_amount: None,
        }
    }

    /// The accepted side, if any
    ///
    /// When both flags are set the original offer wins.
    pub fn accepted_terms(&self) -> Option<AcceptedTerms> {
        match (self.offer_accepted, self.counter_offer_accepted) {
            (true, _) => Some(AcceptedTerms::Original),
            (false, true) => Some(AcceptedTerms::Counter),
            (false, false) => None,
        }
    }

    /// Report upstream data anomalies
    ///
    /// Resolution never depends on this; it exists so callers can log or
    /// surface records the data layer should not have produced.
    pub fn integrity_issues(&self) -> Vec<IntegrityIssue> {
        let mut issues = Vec::new();

        if self.offer_accepted && self.counter_offer_accepted {
            issues.push(IntegrityIssue::BothOffersAccepted);
        }

        for (field, amount) in self.monetary_fields() {
            if amount.is_some_and(|value| value.is_sign_negative() && !value.is_zero()) {
                issues.push(IntegrityIssue::NegativeAmount { field });
            }
        }

        if let Some(terms) = self.accepted_terms() {
            for (field, present) in self.required_terms(terms) {
                if !present {
                    issues.push(IntegrityIssue::MissingTerm { field });
                }
            }

            if self.negotiation_type == NegotiationType::Installment {
                let (amount, payoff) = match terms {
                    AcceptedTerms::Original => (self.monthly_amount, self.negotiated_amount),
                    AcceptedTerms::Counter => {
                        (self.counter_monthly_amount, self.counter_negotiated_amount)
                    }
                };
                if let (Some(amount), Some(payoff)) = (amount, payoff) {
                    if amount > payoff {
                        issues.push(IntegrityIssue::InstallmentExceedsPayoff);
                    }
                }
            }
        }

        issues
    }

    fn monetary_fields(&self) -> [(&'static str, Option<Decimal>); 6] {
        [
            ("one_time_settlement_amount", self.one_time_settlement_amount),
            ("counter_one_time_amount", self.counter_one_time_amount),
            ("monthly_amount", self.monthly_amount),
            ("counter_monthly_amount", self.counter_monthly_amount),
            ("negotiated_amount", self.negotiated_amount),
            ("counter_negotiated_amount", self.counter_negotiated_amount),
        ]
    }

    fn required_terms(&self, terms: AcceptedTerms) -> Vec<(&'static str, bool)> {
        match (self.negotiation_type, terms) {
            (NegotiationType::PayInFull, AcceptedTerms::Original) => vec![
                ("one_time_settlement_amount", self.one_time_settlement_amount.is_some()),
                ("first_payment_date", self.first_payment_date.is_some()),
            ],
            (NegotiationType::PayInFull, AcceptedTerms::Counter) => vec![
                ("counter_one_time_amount", self.counter_one_time_amount.is_some()),
                ("counter_first_payment_date", self.counter_first_payment_date.is_some()),
            ],
            (NegotiationType::Installment, AcceptedTerms::Original) => vec![
                ("monthly_amount", self.monthly_amount.is_some()),
                ("negotiated_amount", self.negotiated_amount.is_some()),
                ("first_payment_date", self.first_payment_date.is_some()),
            ],
            (NegotiationType::Installment, AcceptedTerms::Counter) => vec![
                ("counter_monthly_amount", self.counter_monthly_amount.is_some()),
                ("counter_negotiated_amount", self.counter_negotiated_amount.is_some()),
                ("counter_first_payment_date", self.counter_first_payment_date.is_some()),
            ],
        }
    }
}

/// Data anomaly found on a negotiation record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntegrityIssue {
    /// Both acceptance flags are set
    BothOffersAccepted,
    /// The accepted branch leaves a required term unset
    MissingTerm {
        /// Name of the unset field
        field: &'static str,
    },
    /// A monetary term is below zero
    NegativeAmount {
        /// Name of the negative field
        field: &'static str,
    },
    /// The recurring amount is larger than the payoff balance
    InstallmentExceedsPayoff,
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BothOffersAccepted => {
                f.write_str("offer and counter-offer are both marked accepted")
            }
            Self::MissingTerm { field } => write!(f, "accepted terms are missing {field}"),
            Self::NegativeAmount { field } => write!(f, "{field} is negative"),
            Self::InstallmentExceedsPayoff => {
                f.write_str("installment amount exceeds the payoff balance")
            }
        }
    }
}

/* -------------------------------------------------------------------------- */
/* Resolved Offer */
/* -------------------------------------------------------------------------- */

/// The one active set of payment terms for a negotiation
///
/// For pay-in-full offers the recurring amount and the payoff balance are the
/// same figure. All three fields unset means no terms were accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ResolvedOffer {
    /// Installment amount, or the settlement amount for pay-in-full
    #[cfg_attr(feature = "ts-gen", ts(type = "string | null"))]
    pub recurring_or_settlement_amount: Option<Decimal>,
    /// Total owed under the accepted terms
    #[cfg_attr(feature = "ts-gen", ts(type = "string | null"))]
    pub payoff_balance: Option<Decimal>,
    /// First (or next) payment date
    pub next_or_first_payment_date: Option<NaiveDate>,
}

impl ResolvedOffer {
    /// No accepted terms
    pub const UNRESOLVED: Self = Self {
        recurring_or_settlement_amount: None,
        payoff_balance: None,
        next_or_first_payment_date: None,
    };

    /// True when at least one term is set
    pub const fn is_resolved(&self) -> bool {
        self.recurring_or_settlement_amount.is_some()
            || self.payoff_balance.is_some()
            || self.next_or_first_payment_date.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn money(value: &str) -> Option<Decimal> {
        Some(Decimal::from_str(value).unwrap())
    }

    #[test]
    fn negotiation_type_codes() {
        assert_eq!(NegotiationType::PayInFull.to_string(), "pif");
        assert_eq!(NegotiationType::from_str("INSTALLMENT").unwrap(), NegotiationType::Installment);
        assert!(NegotiationType::from_str("lease").is_err());
    }

    #[test]
    fn frequency_defaults_to_monthly() {
        assert_eq!(InstallmentFrequency::default(), InstallmentFrequency::Monthly);
        assert_eq!(InstallmentFrequency::from_str("biweekly").unwrap(), InstallmentFrequency::Biweekly);
    }

    #[test]
    fn accepted_terms_prefers_original_offer() {
        let mut record = NegotiationRecord::new(1, 1, NegotiationType::PayInFull);
        assert_eq!(record.accepted_terms(), None);

        record.counter_offer_accepted = true;
        assert_eq!(record.accepted_terms(), Some(AcceptedTerms::Counter));

        record.offer_accepted = true;
        assert_eq!(record.accepted_terms(), Some(AcceptedTerms::Original));
    }

    #[test]
    fn clean_record_has_no_issues() {
        let record = NegotiationRecord {
            offer_accepted: true,
            monthly_amount: money("75.00"),
            negotiated_amount: money("900.00"),
            first_payment_date: NaiveDate::from_ymd_opt(2024, 4, 15),
            ..NegotiationRecord::new(7, 3, NegotiationType::Installment)
        };

        assert!(record.integrity_issues().is_empty());
    }

    #[test]
    fn unaccepted_record_only_checks_amount_signs() {
        let record = NegotiationRecord {
            counter_monthly_amount: money("-5"),
            ..NegotiationRecord::new(7, 3, NegotiationType::Installment)
        };

        assert_eq!(
            record.integrity_issues(),
            vec![IntegrityIssue::NegativeAmount { field: "counter_monthly_amount" }]
        );
    }

    #[test]
    fn reports_both_accepted_and_missing_terms() {
        let record = NegotiationRecord {
            offer_accepted: true,
            counter_offer_accepted: true,
            one_time_settlement_amount: money("500.00"),
            ..NegotiationRecord::new(7, 3, NegotiationType::PayInFull)
        };

        let issues = record.integrity_issues();
        assert_eq!(
            issues,
            vec![
                IntegrityIssue::BothOffersAccepted,
                IntegrityIssue::MissingTerm { field: "first_payment_date" },
            ]
        );
        assert_eq!(issues[1].to_string(), "accepted terms are missing first_payment_date");
    }

    #[test]
    fn reports_installment_larger_than_payoff() {
        let record = NegotiationRecord {
            counter_offer_accepted: true,
            counter_monthly_amount: money("1000"),
            counter_negotiated_amount: money("900"),
            counter_first_payment_date: NaiveDate::from_ymd_opt(2024, 4, 15),
            ..NegotiationRecord::new(7, 3, NegotiationType::Installment)
        };

        assert_eq!(record.integrity_issues(), vec![IntegrityIssue::InstallmentExceedsPayoff]);
    }

    #[test]
    fn unresolved_offer_is_default() {
        assert_eq!(ResolvedOffer::default(), ResolvedOffer::UNRESOLVED);
        assert!(!ResolvedOffer::UNRESOLVED.is_resolved());

        let resolved =
            ResolvedOffer { payoff_balance: money("0"), ..ResolvedOffer::UNRESOLVED };
        assert!(resolved.is_resolved());
    }

    #[test]
    fn record_deserializes_with_defaults() {
        let json = r#"{
            "consumer_id": 11,
            "company_id": 2,
            "negotiation_type": "pay_in_full",
            "offer_accepted": true,
            "one_time_settlement_amount": "500.00",
            "counter_one_time_amount": null,
            "first_payment_date": "2024-03-01",
            "counter_first_payment_date": null,
            "monthly_amount": null,
            "counter_monthly_amount": null,
            "negotiated_amount": null,
            "counter_negotiated_amount": null
        }"#;

        let record: NegotiationRecord = serde_json::from_str(json).unwrap();
        assert!(!record.counter_offer_accepted);
        assert_eq!(record.installment_frequency, InstallmentFrequency::Monthly);
        assert_eq!(record.one_time_settlement_amount, money("500.00"));
        assert_eq!(record.first_payment_date, NaiveDate::from_ymd_opt(2024, 3, 1));
    }
}
