//! Response types for the tool rental API.
//!
//! This module defines the success and error response structures and the
//! mapping from engine errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::DayCharge;
use crate::error::EngineError;
use crate::models::RentalAgreement;

/// Longest day schedule returned by `/checkout`.
pub const MAX_SCHEDULE_DAYS: usize = 366;

/// Response body for a successful `/checkout`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutResponse {
    /// Identifier of this checkout, also logged as the correlation id.
    pub checkout_id: Uuid,
    /// The priced agreement.
    pub agreement: RentalAgreement,
    /// The billing decision for each day of the rental, up to
    /// [`MAX_SCHEDULE_DAYS`] days.
    pub day_charges: Vec<DayCharge>,
    /// True when the rental runs past the returned schedule.
    pub schedule_truncated: bool,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Individual problems behind the error, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details,
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>, details: Vec<String>) -> Self {
        Self::with_details("VALIDATION_ERROR", message, details)
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
            EngineError::Validation(err) => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(
                    message,
                    err.violations().iter().map(ToString::to_string).collect(),
                ),
            },
            EngineError::DateOutOfRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("DATE_OUT_OF_RANGE", message),
            },
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::UnknownToolType { .. }
            | EngineError::InvalidHolidayRule { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", vec![message]),
            },
        }
    }
}
