//! Response types for the Timesheet Engine API.
//!
//! This module defines the success bodies, the error response structure and
//! the mapping from engine errors to HTTP status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::calculation::{Rejection, ShiftCheck};
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

    /// Creates a grade not found error response.
    pub fn grade_not_found(code: &str) -> Self {
        Self::with_details(
            "GRADE_NOT_FOUND",
            format!("Grade not found: {}", code),
            "Grade codes run from \"1\" to \"9\"",
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an error response for a business-rule rejection.
    pub fn rejected(rejection: &Rejection) -> Self {
        let code = match rejection {
            Rejection::InvalidDate { .. } => "INVALID_DATE",
            Rejection::DailyLimitReached { .. } => "DAILY_LIMIT_REACHED",
            Rejection::Overlap { .. } => "OVERLAP",
            Rejection::WeeklyLimitExceeded { .. } => "WEEKLY_LIMIT_EXCEEDED",
            Rejection::DuplicateWork { .. } => "DUPLICATE_WORK",
            Rejection::NotFound { .. } => "SHIFT_NOT_FOUND",
        };
        Self::new(code, rejection.to_string())
    }
}

/// Body of `POST /shifts/validate`.
///
/// A rejection is a normal answer, not a failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// Whether the shift may be stored.
    pub accepted: bool,
    /// Week bounds and resulting weekly total when accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check: Option<ShiftCheck>,
    /// The rule that failed when rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<Rejection>,
    /// User-facing description of the rejection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<Result<ShiftCheck, Rejection>> for ValidationResponse {
    fn from(result: Result<ShiftCheck, Rejection>) -> Self {
        match result {
            Ok(check) => Self {
                accepted: true,
                check: Some(check),
                rejection: None,
                message: None,
            },
            Err(rejection) => Self {
                accepted: false,
                check: None,
                message: Some(rejection.to_string()),
                rejection: Some(rejection),
            },
        }
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
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::GradeNotFound { code } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::grade_not_found(&code),
            },
            EngineError::TemplateNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "TEMPLATE_NOT_FOUND",
                    "Timesheet template could not be loaded",
                    path,
                ),
            },
            EngineError::WorksheetNotFound { name } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "WORKSHEET_NOT_FOUND",
                    format!("Worksheet '{}' not found in timesheet template", name),
                    "The configured worksheet name does not match the template",
                ),
            },
            EngineError::InvalidShift {
                shift_id,
                date,
                message,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_SHIFT",
                    format!("Invalid shift {} on {}: {}", shift_id, date, message),
                    "The shift data contains invalid information",
                ),
            },
            EngineError::TemplateFull { days } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "TEMPLATE_FULL",
                    "The month has more timesheet rows than the template can hold",
                    format!("Days without a template row: {:?}", days),
                ),
            },
            EngineError::ExportError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("EXPORT_ERROR", "Timesheet export failed", message),
            },
        }
    }
}

impl From<Rejection> for ApiErrorResponse {
    fn from(rejection: Rejection) -> Self {
        let status = match rejection {
            Rejection::DuplicateWork { .. } => StatusCode::CONFLICT,
            Rejection::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        };
        ApiErrorResponse {
            status,
            error: ApiError::rejected(&rejection),
        }
    }
}
