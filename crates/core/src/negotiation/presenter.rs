//! Rendering resolved offers for display surfaces
//!
//! Dashboards and agreements show a uniform "amount / payoff / date" row for
//! every consumer. Unset terms are replaced by a placeholder here so callers
//! never branch on resolution state themselves.

use std::sync::Arc;

use younegotiate_domain::constants::UNRESOLVED_PLACEHOLDER;
use younegotiate_domain::{
    AcceptedTerms, InstallmentFrequency, NegotiationRecord, NegotiationType, OfferView,
    ResolvedOffer,
};

use super::ports::{CurrencyFormatter, DateFormatter};

/// Formats resolved offers into [`OfferView`]s
#[derive(Clone)]
pub struct OfferPresenter {
    currency: Arc<dyn CurrencyFormatter>,
    dates: Arc<dyn DateFormatter>,
    placeholder: String,
}

impl OfferPresenter {
    /// Create a presenter using the default `N/A` placeholder
    pub fn new(currency: Arc<dyn CurrencyFormatter>, dates: Arc<dyn DateFormatter>) -> Self {
        Self { currency, dates, placeholder: UNRESOLVED_PLACEHOLDER.to_string() }
    }

    /// Override the text shown for unset terms
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Text shown for unset terms
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Render the resolved terms of `record`
    pub fn render(&self, record: &NegotiationRecord, resolved: &ResolvedOffer) -> OfferView {
        let amount = resolved.recurring_or_settlement_amount.map(|value| self.currency.format(value));
        let payoff_balance = resolved.payoff_balance.map(|value| self.currency.format(value));
        let payment_date = resolved.next_or_first_payment_date.map(|date| self.dates.format(date));
        let label = record.accepted_terms().map(|terms| {
            terms_label(record.negotiation_type, record.installment_frequency, terms)
        });

        OfferView {
            resolved: label.is_some(),
            terms_label: self.or_placeholder(label),
            amount: self.or_placeholder(amount),
            payoff_balance: self.or_placeholder(payoff_balance),
            payment_date: self.or_placeholder(payment_date),
        }
    }

    fn or_placeholder(&self, value: Option<String>) -> String {
        value.unwrap_or_else(|| self.placeholder.clone())
    }
}

fn terms_label(
    negotiation_type: NegotiationType,
    frequency: InstallmentFrequency,
    terms: AcceptedTerms,
) -> String {
    let base = match negotiation_type {
        NegotiationType::PayInFull => "settlement",
        NegotiationType::Installment => match frequency {
            InstallmentFrequency::Weekly => "weekly payment",
            InstallmentFrequency::Biweekly => "biweekly payment",
            InstallmentFrequency::Monthly => "monthly payment",
        },
    };

    let label = match terms {
        AcceptedTerms::Original => base.to_string(),
        AcceptedTerms::Counter => format!("counter {base}"),
    };

    capitalize(&label)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}
