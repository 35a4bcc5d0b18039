//! Domain types and models

pub mod negotiation;
pub mod schedule;
pub mod summary;
pub mod view;

pub use negotiation::{
    AcceptedTerms, InstallmentFrequency, IntegrityIssue, NegotiationRecord, NegotiationType,
    ResolvedOffer,
};
pub use schedule::{PaymentSchedule, ScheduledPayment};
pub use summary::PortfolioSummary;
pub use view::OfferView;
