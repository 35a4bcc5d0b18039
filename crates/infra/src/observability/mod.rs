//! Observability infrastructure
//!
//! Libraries in this workspace only emit `tracing` events; installing the
//! global subscriber is left to the process entry point via
//! [`init_tracing`].

pub mod logging;

pub use logging::{build_env_filter, init_tracing};
