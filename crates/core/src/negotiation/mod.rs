//! Negotiation offer resolution
//!
//! Resolution itself ([`resolver::resolve`]) is pure. Schedule projection,
//! portfolio aggregation and presentation build on its output, and
//! [`NegotiationService`] ties them to a repository.

pub mod ports;
pub mod presenter;
pub mod resolver;
pub mod schedule;
pub mod service;
pub mod summary;

pub use presenter::OfferPresenter;
pub use resolver::resolve;
pub use schedule::project_schedule;
pub use service::NegotiationService;
pub use summary::summarize;
