//! HTTP request handlers for the presence log API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::PresenceResult;
use crate::models::EmployeeId;

use super::request::EmployeeQuery;
use super::response::{ApiErrorResponse, EmployeeInfo, EmployeesResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/enter", post(enter_handler))
        .route("/exit", post(exit_handler))
        .route("/info", get(info_handler))
        .route("/info/:id", get(info_by_id_handler))
        .with_state(state)
}

/// Handler for POST /enter?id=<id>.
async fn enter_handler(
    State(state): State<AppState>,
    query: Result<Query<EmployeeQuery>, QueryRejection>,
) -> Response {
    record_event(&state, query, "enter", |state, id| {
        state.registry().record_enter(id, state.clock().now())
    })
}

/// Handler for POST /exit?id=<id>.
async fn exit_handler(
    State(state): State<AppState>,
    query: Result<Query<EmployeeQuery>, QueryRejection>,
) -> Response {
    record_event(&state, query, "exit", |state, id| {
        state.registry().record_exit(id, state.clock().now())
    })
}

fn record_event<F>(
    state: &AppState,
    query: Result<Query<EmployeeQuery>, QueryRejection>,
    event: &str,
    apply: F,
) -> Response
where
    F: FnOnce(&AppState, EmployeeId) -> PresenceResult<()>,
{
    let correlation_id = Uuid::new_v4();

    let employee_id = match query {
        Ok(Query(query)) => query.id,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                event,
                error = %rejection.body_text(),
                "Invalid query string"
            );
            return ApiErrorResponse::bad_request(rejection.body_text()).into_response();
        }
    };

    match apply(state, employee_id) {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                event,
                "Presence event accepted"
            );
            StatusCode::OK.into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                event,
                error = %err,
                "Presence event refused"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /info.
///
/// Never fails; an empty registry yields an empty list.
async fn info_handler(State(state): State<AppState>) -> Json<EmployeesResponse> {
    let employees: Vec<EmployeeInfo> = state
        .registry()
        .get_all()
        .into_iter()
        .map(Into::into)
        .collect();
    info!(employees_count = employees.len(), "Listing presence history");
    Json(EmployeesResponse { employees })
}

/// Handler for GET /info/:id.
async fn info_by_id_handler(
    State(state): State<AppState>,
    id: Result<Path<EmployeeId>, PathRejection>,
) -> Response {
    let employee_id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Invalid employee id in path");
            return ApiErrorResponse::bad_request(rejection.body_text()).into_response();
        }
    };

    match state.registry().get_one(employee_id) {
        Ok(presence) => Json(EmployeeInfo::from(presence)).into_response(),
        Err(err) => {
            warn!(employee_id = %employee_id, error = %err, "Presence lookup failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::response::ApiError;
    use crate::clock::ManualClock;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 13, 9, 0, 0).unwrap()
    }

    fn create_test_state() -> (AppState, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(start()));
        (AppState::with_clock(clock.clone()), clock)
    }

    async fn send(router: &Router, method: &str, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_enter_returns_200_with_empty_body() {
        let (state, _) = create_test_state();
        let router = create_router(state.clone());

        let (status, body) = send(&router, "POST", "/enter?id=1").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
        assert_eq!(state.registry().len(), 1);
    }

    #[tokio::test]
    async fn test_enter_uses_injected_clock() {
        let (state, clock) = create_test_state();
        let router = create_router(state.clone());

        send(&router, "POST", "/enter?id=1").await;
        clock.advance(Duration::hours(8));
        send(&router, "POST", "/exit?id=1").await;

        let presence = state.registry().get_one(EmployeeId(1)).unwrap();
        assert_eq!(presence.intervals[0].enter(), start());
        assert_eq!(
            presence.intervals[0].exit(),
            Some(start() + Duration::hours(8))
        );
    }

    #[tokio::test]
    async fn test_double_enter_returns_409() {
        let (state, _) = create_test_state();
        let router = create_router(state);

        send(&router, "POST", "/enter?id=1").await;
        let (status, body) = send(&router, "POST", "/enter?id=1").await;

        assert_eq!(status, StatusCode::CONFLICT);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_STATE_TRANSITION");
    }

    #[tokio::test]
    async fn test_exit_unknown_employee_returns_404() {
        let (state, _) = create_test_state();
        let router = create_router(state);

        let (status, body) = send(&router, "POST", "/exit?id=99").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "EMPLOYEE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_missing_id_returns_400() {
        let (state, _) = create_test_state();
        let router = create_router(state);

        let (status, body) = send(&router, "POST", "/enter").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_info_on_empty_registry_returns_empty_list() {
        let (state, _) = create_test_state();
        let router = create_router(state);

        let (status, body) = send(&router, "GET", "/info").await;

        assert_eq!(status, StatusCode::OK);
        let response: EmployeesResponse = serde_json::from_slice(&body).unwrap();
        assert!(response.employees.is_empty());
    }

    #[tokio::test]
    async fn test_info_by_id_returns_history() {
        let (state, clock) = create_test_state();
        let router = create_router(state);

        send(&router, "POST", "/enter?id=3").await;
        clock.advance(Duration::minutes(90));
        send(&router, "POST", "/exit?id=3").await;

        let (status, body) = send(&router, "GET", "/info/3").await;

        assert_eq!(status, StatusCode::OK);
        let info: EmployeeInfo = serde_json::from_slice(&body).unwrap();
        assert_eq!(info.employee_id, EmployeeId(3));
        assert_eq!(
            info.dates,
            vec![vec![
                "2026-01-13T09:00:00Z".to_string(),
                "2026-01-13T10:30:00Z".to_string()
            ]]
        );
    }

    #[tokio::test]
    async fn test_info_by_unknown_id_returns_404() {
        let (state, _) = create_test_state();
        let router = create_router(state);

        let (status, _) = send(&router, "GET", "/info/2").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_info_by_non_integer_id_returns_400() {
        let (state, _) = create_test_state();
        let router = create_router(state);

        let (status, body) = send(&router, "GET", "/info/abc").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }
}
