//! Builds a `NegotiationService` from display configuration

use std::sync::Arc;

use younegotiate_core::{NegotiationRepository, NegotiationService, OfferPresenter};
use younegotiate_domain::{DisplayConfig, Result};

use crate::formatting::{PatternDateFormatter, UsdCurrencyFormatter};

/// Presenter using the configured symbol, date pattern and placeholder
///
/// # Errors
/// Returns `YouNegotiateError::Config` if the date pattern is invalid.
pub fn build_presenter(display: &DisplayConfig) -> Result<OfferPresenter> {
    let currency = UsdCurrencyFormatter::new(display.currency_symbol.clone());
    let dates = PatternDateFormatter::new(display.date_format.clone())?;

    Ok(OfferPresenter::new(Arc::new(currency), Arc::new(dates))
        .with_placeholder(display.unresolved_placeholder.clone()))
}

/// Wire a repository to a presenter built from `display`
///
/// # Errors
/// Same as [`build_presenter`].
pub fn build_negotiation_service(
    display: &DisplayConfig,
    repository: Arc<dyn NegotiationRepository>,
) -> Result<NegotiationService> {
    let presenter = build_presenter(display)?;
    let (symbol, pattern) = (&display.currency_symbol, &display.date_format);
    tracing::debug!(
        currency_symbol = %symbol,
        date_format = %pattern,
        "negotiation service configured"
    );
    Ok(NegotiationService::new(repository, presenter))
}
