//! Negotiation record storage adapters

pub mod memory;

pub use memory::InMemoryNegotiationRepository;
