//! Payment schedule projection
//!
//! Expands resolved offer terms into the dated payments they imply. A
//! pay-in-full offer is one payment; an installment plan repeats the
//! installment amount until the payoff balance is covered, with the last
//! payment carrying the remainder.

use chrono::{Days, Months, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use younegotiate_domain::constants::{
    BIWEEKLY_INTERVAL_DAYS, MAX_SCHEDULED_INSTALLMENTS, WEEKLY_INTERVAL_DAYS,
};
use younegotiate_domain::{
    InstallmentFrequency, NegotiationRecord, NegotiationType, PaymentSchedule, ResolvedOffer,
    ScheduledPayment,
};

/// Project the payments for a resolved negotiation
///
/// Returns `None` when nothing was accepted, when the accepted terms lack an
/// amount, payoff balance or date, when either figure is not positive, or
/// when the plan would exceed [`MAX_SCHEDULED_INSTALLMENTS`] payments.
pub fn project_schedule(
    record: &NegotiationRecord,
    resolved: &ResolvedOffer,
) -> Option<PaymentSchedule> {
    let accepted_terms = record.accepted_terms()?;
    let amount = resolved.recurring_or_settlement_amount?;
    let payoff = resolved.payoff_balance?;
    let first_due = resolved.next_or_first_payment_date?;

    if amount <= Decimal::ZERO || payoff <= Decimal::ZERO {
        return None;
    }

    let installments = match record.negotiation_type {
        NegotiationType::PayInFull => {
            vec![ScheduledPayment { sequence: 1, due_date: first_due, amount: payoff }]
        }
        NegotiationType::Installment => {
            installment_plan(amount, payoff, first_due, record.installment_frequency)?
        }
    };

    Some(PaymentSchedule {
        negotiation_type: record.negotiation_type,
        accepted_terms,
        installments,
        total: payoff,
    })
}

fn installment_plan(
    amount: Decimal,
    payoff: Decimal,
    first_due: NaiveDate,
    frequency: InstallmentFrequency,
) -> Option<Vec<ScheduledPayment>> {
    let count = payoff.checked_div(amount)?.ceil().to_u32()?;
    if count == 0 || count > MAX_SCHEDULED_INSTALLMENTS {
        return None;
    }

    let remainder = payoff.checked_sub(amount.checked_mul(Decimal::from(count - 1))?)?;

    (0..count)
        .map(|index| {
            let due_date = nth_due_date(first_due, frequency, index)?;
            let amount = if index + 1 == count { remainder } else { amount };
            Some(ScheduledPayment { sequence: index + 1, due_date, amount })
        })
        .collect()
}

/// Offsets are always taken from the first date so month-end clamping
/// (Jan 31 -> Feb 29) does not drift into later months.
fn nth_due_date(first_due: NaiveDate, frequency: InstallmentFrequency, index: u32) -> Option<NaiveDate> {
    match frequency {
        InstallmentFrequency::Weekly => {
            first_due.checked_add_days(Days::new(WEEKLY_INTERVAL_DAYS * u64::from(index)))
        }
        InstallmentFrequency::Biweekly => {
            first_due.checked_add_days(Days::new(BIWEEKLY_INTERVAL_DAYS * u64::from(index)))
        }
        InstallmentFrequency::Monthly => first_due.checked_add_months(Months::new(index)),
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use younegotiate_domain::AcceptedTerms;

    use super::*;
    use crate::negotiation::resolver::resolve;

    fn money(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn installment(monthly: &str, payoff: &str, first: NaiveDate) -> NegotiationRecord {
        NegotiationRecord {
            offer_accepted: true,
            monthly_amount: Some(money(monthly)),
            negotiated_amount: Some(money(payoff)),
            first_payment_date: Some(first),
            ..NegotiationRecord::new(1, 1, NegotiationType::Installment)
        }
    }

    fn schedule_for(record: &NegotiationRecord) -> Option<PaymentSchedule> {
        project_schedule(record, &resolve(record))
    }

    #[test]
    fn pay_in_full_is_a_single_payment() {
        let record = NegotiationRecord {
            counter_offer_accepted: true,
            counter_one_time_amount: Some(money("450.00")),
            counter_first_payment_date: Some(date(2024, 3, 15)),
            ..NegotiationRecord::new(1, 1, NegotiationType::PayInFull)
        };

        let schedule = schedule_for(&record).unwrap();
        assert_eq!(schedule.accepted_terms, AcceptedTerms::Counter);
        assert_eq!(
            schedule.installments,
            vec![ScheduledPayment { sequence: 1, due_date: date(2024, 3, 15), amount: money("450.00") }]
        );
        assert_eq!(schedule.total, money("450.00"));
    }

    #[test]
    fn even_installments_cover_payoff_exactly() {
        let schedule = schedule_for(&installment("75.00", "900.00", date(2024, 4, 15))).unwrap();

        assert_eq!(schedule.installment_count(), 12);
        assert!(schedule.installments.iter().all(|p| p.amount == money("75.00")));
        assert_eq!(schedule.final_due_date(), Some(date(2025, 3, 15)));
    }

    #[test]
    fn last_installment_carries_remainder() {
        let schedule = schedule_for(&installment("300", "1000", date(2024, 1, 10))).unwrap();

        let amounts: Vec<Decimal> = schedule.installments.iter().map(|p| p.amount).collect();
        assert_eq!(amounts, vec![money("300"), money("300"), money("300"), money("100")]);

        let total: Decimal = amounts.iter().sum();
        assert_eq!(total, schedule.total);
    }

    #[test]
    fn monthly_dates_clamp_to_month_end_without_drift() {
        let schedule = schedule_for(&installment("100", "300", date(2024, 1, 31))).unwrap();

        let dates: Vec<NaiveDate> = schedule.installments.iter().map(|p| p.due_date).collect();
        assert_eq!(dates, vec![date(2024, 1, 31), date(2024, 2, 29), date(2024, 3, 31)]);
    }

    #[test]
    fn weekly_and_biweekly_spacing() {
        let mut record = installment("50", "150", date(2024, 5, 1));

        record.installment_frequency = InstallmentFrequency::Weekly;
        let weekly = schedule_for(&record).unwrap();
        assert_eq!(weekly.final_due_date(), Some(date(2024, 5, 15)));

        record.installment_frequency = InstallmentFrequency::Biweekly;
        let biweekly = schedule_for(&record).unwrap();
        assert_eq!(biweekly.installments[1].due_date, date(2024, 5, 15));
        assert_eq!(biweekly.final_due_date(), Some(date(2024, 5, 29)));
    }

    #[test]
    fn unresolved_or_incomplete_terms_have_no_schedule() {
        let unaccepted = NegotiationRecord {
            offer_accepted: false,
            ..installment("75.00", "900.00", date(2024, 4, 15))
        };
        assert!(schedule_for(&unaccepted).is_none());

        let no_date =
            NegotiationRecord { first_payment_date: None, ..installment("75", "900", date(2024, 4, 15)) };
        assert!(schedule_for(&no_date).is_none());
    }

    #[test]
    fn non_positive_amounts_have_no_schedule() {
        assert!(schedule_for(&installment("0", "900", date(2024, 4, 15))).is_none());
        assert!(schedule_for(&installment("75", "-900", date(2024, 4, 15))).is_none());
    }

    #[test]
    fn oversized_plans_are_rejected() {
        assert!(schedule_for(&installment("1", "10000", date(2024, 4, 15))).is_none());
        assert!(schedule_for(&installment("1", "600", date(2024, 4, 15))).is_some());
    }
}
