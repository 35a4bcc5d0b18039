//! Offer resolution
//!
//! Picks the one active set of payment terms out of a negotiation record.
//! Exactly four branches can match (pay-in-full or installment, original or
//! counter terms); anything else resolves to [`ResolvedOffer::UNRESOLVED`].

use younegotiate_domain::{AcceptedTerms, NegotiationRecord, NegotiationType, ResolvedOffer};

/// Resolve the accepted terms of a negotiation
///
/// Pure and total: absent fields on the matching branch simply come back
/// unset. If both acceptance flags are set the original offer wins.
pub fn resolve(record: &NegotiationRecord) -> ResolvedOffer {
    match (record.negotiation_type, record.accepted_terms()) {
        (NegotiationType::PayInFull, Some(AcceptedTerms::Original)) => ResolvedOffer {
            recurring_or_settlement_amount: record.one_time_settlement_amount,
            payoff_balance: record.one_time_settlement_amount,
            next_or_first_payment_date: record.first_payment_date,
        },
        (NegotiationType::PayInFull, Some(AcceptedTerms::Counter)) => ResolvedOffer {
            recurring_or_settlement_amount: record.counter_one_time_amount,
            payoff_balance: record.counter_one_time_amount,
            next_or_first_payment_date: record.counter_first_payment_date,
        },
        (NegotiationType::Installment, Some(AcceptedTerms::Original)) => ResolvedOffer {
            recurring_or_settlement_amount: record.monthly_amount,
            payoff_balance: record.negotiated_amount,
            next_or_first_payment_date: record.first_payment_date,
        },
        (NegotiationType::Installment, Some(AcceptedTerms::Counter)) => ResolvedOffer {
            recurring_or_settlement_amount: record.counter_monthly_amount,
            payoff_balance: record.counter_negotiated_amount,
            next_or_first_payment_date: record.counter_first_payment_date,
        },
        (_, None) => ResolvedOffer::UNRESOLVED,
    }
}
