//! Integration test utilities for the memo service
//!
//! This crate provides in-memory repository fixtures and helpers for
//! exercising the service layer end to end without a database.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
