//! HTTP API module for the presence log.
//!
//! This module provides the REST API endpoints for recording arrivals and
//! departures and reading back presence history.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::EmployeeQuery;
pub use response::{
    ApiError, ApiErrorResponse, EmployeeInfo, EmployeesResponse, OPEN_INTERVAL_MARKER,
};
pub use state::AppState;
