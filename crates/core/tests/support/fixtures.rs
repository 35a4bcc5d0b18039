//! Negotiation record fixtures

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use younegotiate_domain::{NegotiationRecord, NegotiationType};

pub fn money(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Creditor's pay-in-full offer accepted by the consumer.
pub fn accepted_settlement(consumer_id: u64, company_id: u64, amount: &str) -> NegotiationRecord {
    NegotiationRecord {
        offer_accepted: true,
        one_time_settlement_amount: Some(money(amount)),
        first_payment_date: Some(date(2024, 3, 1)),
        ..NegotiationRecord::new(consumer_id, company_id, NegotiationType::PayInFull)
    }
}

/// Consumer's installment counter-offer accepted by the creditor.
pub fn accepted_counter_plan(
    consumer_id: u64,
    company_id: u64,
    monthly: &str,
    payoff: &str,
) -> NegotiationRecord {
    NegotiationRecord {
        counter_offer_accepted: true,
        counter_monthly_amount: Some(money(monthly)),
        counter_negotiated_amount: Some(money(payoff)),
        counter_first_payment_date: Some(date(2024, 4, 15)),
        ..NegotiationRecord::new(consumer_id, company_id, NegotiationType::Installment)
    }
}

/// Installment negotiation still open on both sides.
pub fn open_plan(consumer_id: u64, company_id: u64) -> NegotiationRecord {
    NegotiationRecord {
        monthly_amount: Some(money("50.00")),
        negotiated_amount: Some(money("600.00")),
        ..NegotiationRecord::new(consumer_id, company_id, NegotiationType::Installment)
    }
}
