//! HTTP request handlers for the raise allocation API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::allocation::{AllocationParams, allocate_raises};
use crate::budget::resolve_budget;
use crate::error::EngineResult;
use crate::models::{AllocationResult, Employee};

use super::request::AllocationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/allocate", post(allocate_handler))
        .with_state(state)
}

/// Handler for POST /allocate endpoint.
///
/// Accepts an allocation request and returns the allocation result.
async fn allocate_handler(
    State(state): State<AppState>,
    payload: Result<Json<AllocationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing allocation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
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

    // The greedy loop is CPU bound and sized by the request.
    let outcome = tokio::task::spawn_blocking(move || perform_allocation(request, &state)).await;
    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(join_error) => {
            error!(
                correlation_id = %correlation_id,
                error = %join_error,
                "Allocation task failed"
            );
            return ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("INTERNAL_ERROR", "Allocation task failed"),
            }
            .into_response();
        }
    };

    match outcome {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                allocation_id = %result.allocation_id,
                employees = result.stats.len(),
                distributed = result.budget.distributed_total,
                "Allocation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Allocation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Resolves the budget and runs the allocation for one request.
fn perform_allocation(
    request: AllocationRequest,
    state: &AppState,
) -> EngineResult<AllocationResult> {
    let employees: Vec<Employee> = request.employees.into_iter().map(Into::into).collect();
    let budget = resolve_budget(&employees, request.raise_percent, request.raise_budget)?;

    let params = AllocationParams::new(budget.raise_budget)
        .with_raise_increment(request.raise_increment)
        .with_minimum_raise_percent(budget.cap_minimum_raise(request.minimum_raise_percent));

    allocate_raises(&employees, state.config().bands(), &params)
}
