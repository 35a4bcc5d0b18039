//! In-memory implementation of `NegotiationRepository`
//!
//! Backs demos, fixtures and tests. Records are keyed by consumer; a
//! consumer has at most one live negotiation.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use younegotiate_core::NegotiationRepository;
use younegotiate_domain::{NegotiationRecord, Result as DomainResult};

/// Thread-safe map of consumer id to negotiation record
#[derive(Debug, Default)]
pub struct InMemoryNegotiationRepository {
    records: RwLock<HashMap<u64, NegotiationRecord>>,
}

impl InMemoryNegotiationRepository {
    /// Empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with `records`, later duplicates replacing earlier ones
    pub fn with_records(records: impl IntoIterator<Item = NegotiationRecord>) -> Self {
        let repository = Self::new();
        for record in records {
            repository.upsert(record);
        }
        repository
    }

    /// Insert or replace the consumer's negotiation, returning the previous one
    pub fn upsert(&self, record: NegotiationRecord) -> Option<NegotiationRecord> {
        self.records.write().insert(record.consumer_id, record)
    }

    /// Drop the consumer's negotiation, returning it if present
    pub fn remove(&self, consumer_id: u64) -> Option<NegotiationRecord> {
        self.records.write().remove(&consumer_id)
    }

    /// Number of stored negotiations
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether no negotiations are stored
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl NegotiationRepository for InMemoryNegotiationRepository {
    async fn find_by_consumer(&self, consumer_id: u64) -> DomainResult<Option<NegotiationRecord>> {
        Ok(self.records.read().get(&consumer_id).cloned())
    }

    async fn list_by_company(&self, company_id: u64) -> DomainResult<Vec<NegotiationRecord>> {
        let mut records: Vec<NegotiationRecord> = self
            .records
            .read()
            .values()
            .filter(|record| record.company_id == company_id)
            .cloned()
            .collect();
        records.sort_by_key(|record| record.consumer_id);
        Ok(records)
    }
}
