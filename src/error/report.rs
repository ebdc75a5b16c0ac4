//! Report error module.
//!
//! This module defines error types raised by report sinks while writing
//! experiment results.

use std::io;
use thiserror::Error;

/// Errors that can occur while writing reports.
#[derive(Error, Debug)]
pub enum ReportError {
    /// CSV serialization or write failure.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying writer failure.
    #[error("Report I/O error: {0}")]
    Io(#[from] io::Error),
}
