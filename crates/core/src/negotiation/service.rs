//! Negotiation service - core business logic

use std::sync::Arc;

use tracing::{debug, warn};
use younegotiate_domain::{
    NegotiationRecord, OfferView, PaymentSchedule, PortfolioSummary, ResolvedOffer, Result,
    YouNegotiateError,
};

use super::ports::NegotiationRepository;
use super::presenter::OfferPresenter;
use super::resolver::resolve;
use super::schedule::project_schedule;
use super::summary::summarize;

/// Resolves stored negotiations for display and reporting surfaces
pub struct NegotiationService {
    repository: Arc<dyn NegotiationRepository>,
    presenter: OfferPresenter,
}

impl NegotiationService {
    /// Create a new negotiation service
    pub fn new(repository: Arc<dyn NegotiationRepository>, presenter: OfferPresenter) -> Self {
        Self { repository, presenter }
    }

    /// Resolve the accepted terms for a consumer
    ///
    /// # Errors
    /// Returns `YouNegotiateError::NotFound` if the consumer has no
    /// negotiation, or any error raised by the repository.
    pub async fn resolve_for_consumer(&self, consumer_id: u64) -> Result<ResolvedOffer> {
        let record = self.load(consumer_id).await?;
        Ok(resolve(&record))
    }

    /// Resolve and render the terms for a consumer
    ///
    /// # Errors
    /// Same as [`Self::resolve_for_consumer`].
    pub async fn offer_view_for_consumer(&self, consumer_id: u64) -> Result<OfferView> {
        let record = self.load(consumer_id).await?;
        let resolved = resolve(&record);
        Ok(self.presenter.render(&record, &resolved))
    }

    /// Project the payment schedule for a consumer
    ///
    /// `Ok(None)` means the negotiation exists but its terms do not describe
    /// a payable plan (nothing accepted, or incomplete terms).
    ///
    /// # Errors
    /// Same as [`Self::resolve_for_consumer`].
    pub async fn schedule_for_consumer(&self, consumer_id: u64) -> Result<Option<PaymentSchedule>> {
        let record = self.load(consumer_id).await?;
        let resolved = resolve(&record);
        let schedule = project_schedule(&record, &resolved);

        if schedule.is_none() && record.accepted_terms().is_some() {
            debug!(consumer_id, "accepted terms do not project to a payment schedule");
        }

        Ok(schedule)
    }

    /// Aggregate resolved terms across a creditor company's consumers
    ///
    /// # Errors
    /// Returns any error raised by the repository.
    pub async fn company_summary(&self, company_id: u64) -> Result<PortfolioSummary> {
        let records = self.repository.list_by_company(company_id).await?;

        let entries: Vec<(NegotiationRecord, ResolvedOffer)> = records
            .into_iter()
            .map(|record| {
                report_integrity(&record);
                let resolved = resolve(&record);
                (record, resolved)
            })
            .collect();

        let summary = summarize(&entries);
        debug!(
            company_id,
            total = summary.total_negotiations,
            resolved = summary.resolved_count,
            "company portfolio summarized"
        );

        Ok(summary)
    }

    async fn load(&self, consumer_id: u64) -> Result<NegotiationRecord> {
        let record = self.repository.find_by_consumer(consumer_id).await?.ok_or_else(|| {
            YouNegotiateError::NotFound(format!("no negotiation for consumer {consumer_id}"))
        })?;

        report_integrity(&record);
        Ok(record)
    }
}

fn report_integrity(record: &NegotiationRecord) {
    for issue in record.integrity_issues() {
        warn!(
            consumer_id = record.consumer_id,
            company_id = record.company_id,
            issue = %issue,
            "negotiation record failed integrity check"
        );
    }
}
