//! Response types for the raise allocation API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

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

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }

    fn internal(error: ApiError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::MissingSalaryBand { level } => Self::bad_request(ApiError::with_details(
                "MISSING_SALARY_BAND",
                message,
                format!("No salary band is configured for level {}", level),
            )),
            EngineError::InvalidTargetSalary { .. } => Self::bad_request(ApiError::with_details(
                "INVALID_TARGET_SALARY",
                message,
                "Level salaries must be positive",
            )),
            EngineError::InvalidEmployee { .. } => Self::bad_request(ApiError::with_details(
                "INVALID_EMPLOYEE",
                message,
                "The employee data contains invalid information",
            )),
            EngineError::InvalidParameter { .. } => {
                Self::bad_request(ApiError::new("VALIDATION_ERROR", message))
            }
            EngineError::ContractViolation { .. } => Self::internal(ApiError::with_details(
                "CONTRACT_VIOLATION",
                "Allocation failed",
                message,
            )),
            EngineError::InvalidSalaryBand { .. }
            | EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. } => Self::internal(ApiError::with_details(
                "CONFIG_ERROR",
                "Configuration error",
                message,
            )),
            EngineError::InputNotFound { .. }
            | EngineError::InputParseError { .. }
            | EngineError::OutputError { .. } => {
                Self::internal(ApiError::with_details("IO_ERROR", "I/O error", message))
            }
        }
    }
}
