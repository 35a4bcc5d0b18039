//! # YouNegotiate Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Configuration loading (environment, JSON, TOML)
//! - Tracing subscriber setup
//! - Currency and date formatter adapters
//! - An in-memory negotiation repository
//! - Service wiring from configuration
//!
//! ## Architecture
//! - Implements traits defined in `younegotiate-core`
//! - Depends on `younegotiate-domain` and `younegotiate-core`
//! - Contains all "impure" code (I/O, environment, global subscribers)

pub mod config;
pub mod database;
pub mod errors;
pub mod formatting;
pub mod observability;
pub mod services;

// Re-export commonly used items
pub use database::InMemoryNegotiationRepository;
pub use errors::InfraError;
pub use formatting::{PatternDateFormatter, UsdCurrencyFormatter};
pub use observability::init_tracing;
pub use services::build_negotiation_service;
