//! Shared test helpers for `younegotiate-core` integration tests.
//!
//! These helpers provide reusable fixtures and lightweight mocks so that
//! service tests can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod fixtures;
pub mod logs;
pub mod repositories;
