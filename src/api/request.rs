//! Request types for the presence log API.
//!
//! This module defines the query parameters accepted by `/enter` and `/exit`.

use serde::Deserialize;

use crate::models::EmployeeId;

/// Query string for `/enter?id=<id>` and `/exit?id=<id>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct EmployeeQuery {
    /// The employee the event is recorded for.
    pub id: EmployeeId,
}
