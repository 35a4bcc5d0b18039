//! Portfolio aggregation for creditor dashboards

use rust_decimal::Decimal;
use tracing::warn;
use younegotiate_domain::{
    AcceptedTerms, NegotiationRecord, NegotiationType, PortfolioSummary, ResolvedOffer,
};

/// Aggregate resolved terms across a set of negotiations
///
/// A negotiation counts as resolved when one of its offers was accepted.
/// Amounts left unset on an accepted branch are skipped, not treated as zero.
/// A record whose amounts would overflow a running total is still counted,
/// but its amounts are left out of every total and a warning is logged.
pub fn summarize(entries: &[(NegotiationRecord, ResolvedOffer)]) -> PortfolioSummary {
    let mut summary = PortfolioSummary::default();

    for (record, resolved) in entries {
        summary.total_negotiations += 1;

        let Some(terms) = record.accepted_terms() else {
            summary.unresolved_count += 1;
            continue;
        };
        summary.resolved_count += 1;

        if terms == AcceptedTerms::Counter {
            summary.counter_offer_count += 1;
        }

        match record.negotiation_type {
            NegotiationType::PayInFull => summary.pay_in_full_count += 1,
            NegotiationType::Installment => summary.installment_count += 1,
        }

        if !add_amounts(&mut summary, record.negotiation_type, resolved) {
            warn!(
                consumer_id = record.consumer_id,
                company_id = record.company_id,
                "resolved amounts overflow portfolio totals, excluded from totals"
            );
        }

        if let Some(date) = resolved.next_or_first_payment_date {
            summary.next_payment_date =
                Some(summary.next_payment_date.map_or(date, |current| current.min(date)));
        }
    }

    summary
}

/// Add one record's amounts to the running totals, all or nothing
///
/// Returns `false` and leaves `summary` untouched if any total would overflow.
fn add_amounts(
    summary: &mut PortfolioSummary,
    negotiation_type: NegotiationType,
    resolved: &ResolvedOffer,
) -> bool {
    let mut settlement = summary.total_settlement_amount;
    let mut recurring = summary.total_recurring_amount;
    let target = match negotiation_type {
        NegotiationType::PayInFull => &mut settlement,
        NegotiationType::Installment => &mut recurring,
    };

    let Some(amount) = checked_sum(*target, resolved.recurring_or_settlement_amount) else {
        return false;
    };
    *target = amount;

    let Some(payoff) = checked_sum(summary.total_payoff_balance, resolved.payoff_balance) else {
        return false;
    };

    summary.total_settlement_amount = settlement;
    summary.total_recurring_amount = recurring;
    summary.total_payoff_balance = payoff;
    true
}

fn checked_sum(total: Decimal, amount: Option<Decimal>) -> Option<Decimal> {
    amount.map_or(Some(total), |amount| total.checked_add(amount))
}
