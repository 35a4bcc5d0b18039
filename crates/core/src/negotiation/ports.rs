//! Port interfaces for negotiation resolution
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use younegotiate_domain::{NegotiationRecord, Result};

/// Trait for loading negotiation records from storage
#[async_trait]
pub trait NegotiationRepository: Send + Sync {
    /// Get the negotiation for a consumer, if one exists
    async fn find_by_consumer(&self, consumer_id: u64) -> Result<Option<NegotiationRecord>>;

    /// Get every negotiation belonging to a creditor company
    async fn list_by_company(&self, company_id: u64) -> Result<Vec<NegotiationRecord>>;
}

/// Locale-aware monetary rendering
pub trait CurrencyFormatter: Send + Sync {
    /// Render `amount` for display, including the currency symbol
    fn format(&self, amount: Decimal) -> String;
}

/// Calendar date rendering
pub trait DateFormatter: Send + Sync {
    /// Render `date` for display
    fn format(&self, date: NaiveDate) -> String;
}
