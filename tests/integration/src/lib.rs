//! Integration test utilities for the accounts store
//!
//! This crate provides helpers for running end-to-end tests through the
//! service layer against a live PostgreSQL database.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
