//! Crate-level tests.
//!
//! This module contains the tests that cut across components:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Report sinks and the experiment runner
//! - Shared fixtures and proptest strategies


pub use test_utils::{latin_string_strategy, TestFixture};
