//! strsearch library
//!
//! Exact string matching with Boyer-Moore and Knuth-Morris-Pratt, plus the
//! instrumentation used to measure their time and auxiliary-space cost.
//!
//! # Architecture
//!
//! - [`matching`]: the search core. Table construction and scans are pure
//!   functions over immutable inputs; no global state.
//! - [`analysis`]: corpus generation, timing, space accounting, report sinks
//!   and the experiment runner.
//! - [`config`] and [`error`]: layered configuration and the application
//!   error type used by the harness and the binary.

pub mod analysis;
pub mod config;
pub mod error;
pub mod matching;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
