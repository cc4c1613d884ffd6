//! Response types for the Time Balance Engine API.
//!
//! This module defines the balance response body, the error response
//! structures and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Response body of the `/balance` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceResponse {
    /// The employee the balance belongs to.
    pub employee_id: String,
    /// The date the balance was calculated for.
    pub end_date: NaiveDate,
    /// Cumulative balance in hours.
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
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

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            EngineError::InvalidContractHistory { .. } => bad_request(
                "INVALID_CONTRACT_HISTORY",
                message,
                "Each contract version needs a distinct valid_from date",
            ),
            EngineError::InvalidAbsence { .. } => bad_request(
                "INVALID_ABSENCE",
                message,
                "The absence request contains invalid information",
            ),
            EngineError::InvalidTimeEntry { .. } => bad_request(
                "INVALID_TIME_ENTRY",
                message,
                "The time entry contains invalid information",
            ),
            EngineError::InvalidAdjustment { .. } => bad_request(
                "INVALID_ADJUSTMENT",
                message,
                "The adjustment contains invalid information",
            ),
            EngineError::InvalidEmployee { .. } => bad_request(
                "INVALID_EMPLOYEE",
                message,
                "The employee data contains invalid information",
            ),
            EngineError::InvalidPeriod { .. } => bad_request(
                "INVALID_PERIOD",
                message,
                "Months run from 1 to 12",
            ),
            EngineError::PeriodTooLong { .. } => bad_request(
                "PERIOD_TOO_LONG",
                message,
                "Move first_work_day closer to the requested period",
            ),
            EngineError::HolidaysUnavailable { .. } => bad_request(
                "HOLIDAYS_UNAVAILABLE",
                message,
                "Supply the year's holidays in the request or add a holiday file",
            ),
        }
    }
}

fn bad_request(code: &str, message: String, details: &str) -> ApiErrorResponse {
    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error: ApiError::with_details(code, message, details),
    }
}
