//! HTTP request handlers for the PAYE engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_payee;
use crate::display::FormattedTaxResult;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, CalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/schedule", get(schedule_handler))
        .with_state(state)
}

/// Handler for GET /schedule: returns the schedule in use.
async fn schedule_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.config().schedule().clone())
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a salary and toggles and returns the PAYE breakdown.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries serde's description of the problem
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();
    let schedule = state.config().schedule();
    let outcome = request
        .to_input()
        .and_then(|input| calculate_payee(&input, schedule));

    match outcome {
        Ok(calculation) => {
            let duration_us = start_time.elapsed().as_micros() as u64;
            info!(
                correlation_id = %correlation_id,
                monthly_salary = %request.monthly_salary,
                annual_tax = %calculation.result.annual_tax,
                warnings = calculation.audit_trace.warnings.len(),
                duration_us,
                "Calculation completed successfully"
            );

            let response = CalculationResponse {
                calculation_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                schedule: schedule.metadata().code.clone(),
                display: FormattedTaxResult::from(&calculation.result),
                calculation,
                duration_us,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    async fn post_body(body: String) -> (StatusCode, Value) {
        let router = create_router(AppState::default());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_api_001_valid_request_returns_200() {
        let (status, body) = post_body(r#"{ "monthly_salary": 500000 }"#.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["schedule"], "NG-PITA");
        assert_eq!(body["result"]["annual_tax"], "840704");
        assert_eq!(body["result"]["monthly_pension_deduction"], "24000");
        assert_eq!(body["display"]["monthly_tax"], "\u{20A6}70,058.67");
        assert_eq!(body["display"]["net_monthly_salary"], "\u{20A6}405,941.33");
        assert!(body["calculation_id"].is_string());
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let (status, body) = post_body("{invalid json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_value(body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_missing_salary_returns_400() {
        let (status, body) = post_body(r#"{ "pension": true }"#.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_value(body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("monthly_salary"));
    }

    #[tokio::test]
    async fn test_api_004_negative_salary_returns_400() {
        let (status, body) = post_body(r#"{ "monthly_salary": -1 }"#.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_value(body).unwrap();
        assert_eq!(error.code, "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_schedule_endpoint_lists_brackets() {
        let router = create_router(AppState::default());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/schedule")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let schedule: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(schedule["brackets"].as_array().unwrap().len(), 6);
        assert_eq!(schedule["metadata"]["currency"], "NGN");
    }
}
