//! Service wiring from configuration

pub mod negotiation;

pub use negotiation::{build_negotiation_service, build_presenter};
