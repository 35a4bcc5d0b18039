//! Mock repository and formatter implementations for testing
//!
//! Provides in-memory mocks for the core ports, enabling deterministic tests
//! without database dependencies.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use younegotiate_core::{CurrencyFormatter, DateFormatter, NegotiationRepository};
use younegotiate_domain::{NegotiationRecord, Result as DomainResult, YouNegotiateError};

/// In-memory mock for `NegotiationRepository`.
///
/// Stores a fixed set of records; can be switched into a failing mode to
/// exercise error propagation.
#[derive(Default, Clone)]
pub struct MockNegotiationRepository {
    records: Arc<Vec<NegotiationRecord>>,
    failing: Arc<AtomicBool>,
}

impl MockNegotiationRepository {
    /// Create a new mock seeded with the provided records.
    pub fn new(records: Vec<NegotiationRecord>) -> Self {
        Self { records: Arc::new(records), failing: Arc::new(AtomicBool::new(false)) }
    }

    /// Convenience helper for adding a single record to the mock.
    pub fn with_record(mut self, record: NegotiationRecord) -> Self {
        Arc::make_mut(&mut self.records).push(record);
        self
    }

    /// Make every subsequent call return a database error.
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> DomainResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(YouNegotiateError::Database("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl NegotiationRepository for MockNegotiationRepository {
    async fn find_by_consumer(&self, consumer_id: u64) -> DomainResult<Option<NegotiationRecord>> {
        self.check()?;
        Ok(self.records.iter().find(|record| record.consumer_id == consumer_id).cloned())
    }

    async fn list_by_company(&self, company_id: u64) -> DomainResult<Vec<NegotiationRecord>> {
        self.check()?;
        Ok(self.records.iter().filter(|record| record.company_id == company_id).cloned().collect())
    }
}

/// Renders amounts as `$` followed by the decimal's own display.
pub struct PlainCurrencyFormatter;

impl CurrencyFormatter for PlainCurrencyFormatter {
    fn format(&self, amount: Decimal) -> String {
        format!("${amount}")
    }
}

/// Renders dates as ISO-8601.
pub struct IsoDateFormatter;

impl DateFormatter for IsoDateFormatter {
    fn format(&self, date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }
}
