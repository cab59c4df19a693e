//! Error types for the PAYE engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition the engine can report.

use thiserror::Error;

/// The main error type for the PAYE engine.
///
/// All fallible operations in the engine return this error type, so callers
/// can handle invalid salaries and schedule problems in one place.
///
/// # Example
///
/// ```
/// use payee_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "monthly_salary".to_string(),
///     message: "must not be negative".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid input 'monthly_salary': must not be negative"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A salary figure was negative, non-finite or too large to compute with.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input field that was rejected.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// Schedule file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Schedule file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A schedule parsed but its values cannot describe a tax table.
    #[error("Invalid tax schedule: {message}")]
    InvalidSchedule {
        /// What was wrong with the schedule.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidInput`] on the given field.
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
