//! Error module for strsearch.
//!
//! The matching core has its own error type ([`MatchError`]); this module
//! wraps it together with the configuration and reporting failures of the
//! surrounding harness into a single application error.

use std::fmt::{Display, Formatter};
use thiserror::Error;

use crate::matching::MatchError;

pub mod config;
pub mod report;

/// Result type alias used throughout the harness.
pub type AppResult<T> = Result<T, AppError>;

/// Core error enum for the application.
#[derive(Error, Debug)]
pub enum AppError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised by a matcher.
    #[error("Match error: {0}")]
    Match(#[from] MatchError),

    /// Errors raised while writing reports.
    #[error("Report error: {0}")]
    Report(#[from] report::ReportError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/Deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// A failed command together with where it failed and what it was working on.
#[derive(Debug)]
pub struct ErrorContext {
    /// The failure itself
    pub error: AppError,

    /// Command or stage that failed, e.g. `search` or `config`
    pub component: String,

    /// The input being processed: a pattern, an output path, a config file
    pub details: Option<String>,
}

impl ErrorContext {
    pub fn new<S: Into<String>>(error: AppError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Names the input the failing command was processing.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Destination for failures the binary cannot recover from.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    fn report(&self, context: &ErrorContext);
}

/// Emits one `error` event per failure through `tracing`.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: &ErrorContext) {
        match &context.details {
            Some(details) => tracing::error!(
                error = %context.error,
                component = %context.component,
                %details,
                "command failed"
            ),
            None => tracing::error!(
                error = %context.error,
                component = %context.component,
                "command failed"
            ),
        }
    }
}
