//! # YouNegotiate Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Offer resolution, schedule projection and portfolio aggregation
//! - Port/adapter interfaces (traits)
//! - The negotiation service
//!
//! ## Architecture Principles
//! - Only depends on `younegotiate-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod negotiation;

// Re-export specific items to avoid ambiguity
pub use negotiation::ports::{CurrencyFormatter, DateFormatter, NegotiationRepository};
pub use negotiation::{
    project_schedule, resolve, summarize, NegotiationService, OfferPresenter,
};
