//! # YouNegotiate Domain
//!
//! Business domain types and models for consumer debt negotiation.
//!
//! This crate contains:
//! - Negotiation records and resolved offer terms
//! - Payment schedule, portfolio summary and display view types
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other YouNegotiate crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
