//! Error types for the presence log.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while recording presence.

use thiserror::Error;

use crate::models::EmployeeId;

/// The main error type for the presence log.
///
/// Core operations return this error type. Neither presence variant is fatal:
/// the registry and its records stay usable after any rejected call.
///
/// # Example
///
/// ```
/// use presence_log::error::PresenceError;
/// use presence_log::models::EmployeeId;
///
/// let error = PresenceError::UnknownEmployee {
///     employee_id: EmployeeId(42),
/// };
/// assert_eq!(error.to_string(), "No employee found with ID 42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresenceError {
    /// An operation required an existing record and none exists.
    #[error("No employee found with ID {employee_id}")]
    UnknownEmployee {
        /// The identifier that was not found.
        employee_id: EmployeeId,
    },

    /// An enter/exit call would break the enter/exit alternation.
    #[error("Invalid state transition for employee {employee_id}: {reason}")]
    InvalidStateTransition {
        /// The employee whose record rejected the call.
        employee_id: EmployeeId,
        /// Why the transition was rejected.
        reason: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return PresenceError.
pub type PresenceResult<T> = Result<T, PresenceError>;
