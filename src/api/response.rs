//! Response types for the presence log API.
//!
//! This module defines the presence history bodies, the error response
//! structures, and error handling for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PresenceError;
use crate::models::{EmployeeId, Interval};
use crate::registry::EmployeePresence;

/// Suffix marking an interval whose exit has not been recorded yet.
pub const OPEN_INTERVAL_MARKER: &str = "# Only enter time was received";

/// One employee's history as returned by `/info` and `/info/:id`.
///
/// Each entry in `dates` is `[enter, exit]` for a closed interval, or a
/// single `"<enter> # Only enter time was received"` for an open one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInfo {
    /// The employee identifier.
    pub employee_id: EmployeeId,
    /// Intervals in call order.
    pub dates: Vec<Vec<String>>,
}

impl From<EmployeePresence> for EmployeeInfo {
    fn from(presence: EmployeePresence) -> Self {
        Self {
            employee_id: presence.employee_id,
            dates: presence.intervals.iter().map(format_interval).collect(),
        }
    }
}

/// Body of `GET /info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeesResponse {
    /// Every known employee, in first-seen order.
    pub employees: Vec<EmployeeInfo>,
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn format_interval(interval: &Interval) -> Vec<String> {
    match *interval {
        Interval::Open { enter } => {
            vec![format!("{} {}", format_timestamp(enter), OPEN_INTERVAL_MARKER)]
        }
        Interval::Closed { enter, exit } => {
            vec![format_timestamp(enter), format_timestamp(exit)]
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates an employee not found error response.
    pub fn employee_not_found(employee_id: EmployeeId) -> Self {
        Self::with_details(
            "EMPLOYEE_NOT_FOUND",
            format!("No employee found with ID {}", employee_id),
            "Record an enter for this employee first",
        )
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response for a malformed request.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::validation_error(message),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PresenceError> for ApiErrorResponse {
    fn from(error: PresenceError) -> Self {
        match error {
            PresenceError::UnknownEmployee { employee_id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::employee_not_found(employee_id),
            },
            PresenceError::InvalidStateTransition {
                employee_id,
                reason,
            } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "INVALID_STATE_TRANSITION",
                    format!("Invalid state transition for employee {}", employee_id),
                    reason,
                ),
            },
            // Config errors only surface at startup; no handler returns them.
            other @ (PresenceError::ConfigNotFound { .. }
            | PresenceError::ConfigParseError { .. }) => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    other.to_string(),
                ),
            },
        }
    }
}
