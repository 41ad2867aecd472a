//! HTTP request handlers for the Timesheet Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{summarize_month, validate_edited_shift, validate_new_shift};
use crate::models::ShiftBook;
use crate::timesheet::export_timesheet;

use super::request::{
    check_shift_dates, ExportRequest, PromoteWorkRequest, SummaryRequest, ValidateShiftRequest,
};
use super::response::{ApiError, ApiErrorResponse, ValidationResponse};
use super::state::AppState;

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/shifts/validate", post(validate_shift_handler))
        .route("/works/promote", post(promote_work_handler))
        .route("/summary", post(summary_handler))
        .route("/export", post(export_handler))
        .with_state(state)
}

/// Handler for POST /shifts/validate.
///
/// Checks a new or edited shift against the caller's snapshot. Rejections
/// are answered with `accepted: false`.
async fn validate_shift_handler(
    State(state): State<AppState>,
    payload: Result<Json<ValidateShiftRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing shift validation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let limits = state.limits();
    let result = match request.original {
        Some(original) => {
            validate_edited_shift(&request.shifts, original, &request.candidate, &limits)
        }
        None => validate_new_shift(&request.shifts, &request.candidate, &limits),
    };

    match &result {
        Ok(check) => info!(
            correlation_id = %correlation_id,
            key = %request.candidate.key(),
            weekly_minutes = check.weekly_minutes,
            "Shift accepted"
        ),
        Err(rejection) => warn!(
            correlation_id = %correlation_id,
            key = %request.candidate.key(),
            rejection = %rejection,
            "Shift rejected"
        ),
    }

    (StatusCode::OK, Json(ValidationResponse::from(result))).into_response()
}

/// Handler for POST /works/promote.
///
/// Registers the work template and promotes it for the requested month.
async fn promote_work_handler(
    State(state): State<AppState>,
    payload: Result<Json<PromoteWorkRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing work promotion request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    if let Err(response) = check_period(correlation_id, request.year, request.month) {
        return response;
    }

    let mut book = ShiftBook::with_records(request.shifts, request.works, state.limits());

    if let Err(rejection) = book.register_work(request.work.clone()) {
        warn!(
            correlation_id = %correlation_id,
            work_id = request.work.id,
            rejection = %rejection,
            "Work registration rejected"
        );
        return error_response(rejection);
    }

    let outcome = book.promote_work(&request.work, request.year, request.month);
    info!(
        correlation_id = %correlation_id,
        work_id = request.work.id,
        added = outcome.added.len(),
        skipped = outcome.skipped.len(),
        "Work promoted"
    );

    (StatusCode::OK, Json(outcome)).into_response()
}

/// Handler for POST /summary.
///
/// Returns per-subject totals and the salary for one month.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    if let Err(response) = check_period(correlation_id, request.year, request.month) {
        return response;
    }

    if let Err(err) = check_shift_dates(&request.shifts) {
        warn!(correlation_id = %correlation_id, error = %err, "Invalid shift in request");
        return error_response(err);
    }

    let grade = match state.config().get_grade(&request.grade) {
        Ok(grade) => grade,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                grade = %request.grade,
                "Grade not found"
            );
            return error_response(err);
        }
    };

    let summary = summarize_month(&request.shifts, request.year, request.month, grade);
    info!(
        correlation_id = %correlation_id,
        shifts_count = summary.shift_count,
        total_minutes = summary.total_minutes,
        salary = %summary.salary,
        "Summary completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(summary),
    )
        .into_response()
}

/// Handler for POST /export.
///
/// Returns the month's timesheet as an xlsx attachment.
async fn export_handler(
    State(state): State<AppState>,
    payload: Result<Json<ExportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing export request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    if let Err(response) = check_period(correlation_id, request.year, request.month) {
        return response;
    }

    if let Err(err) = check_shift_dates(&request.shifts) {
        warn!(correlation_id = %correlation_id, error = %err, "Invalid shift in request");
        return error_response(err);
    }

    let loader = state.config();
    let grade = match loader.get_grade(&request.profile.grade) {
        Ok(grade) => grade,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                grade = %request.profile.grade,
                "Grade not found"
            );
            return error_response(err);
        }
    };

    let start_time = Instant::now();
    match export_timesheet(
        loader.config(),
        &request.profile,
        grade,
        request.year,
        request.month,
        &request.shifts,
    ) {
        Ok(exported) => {
            info!(
                correlation_id = %correlation_id,
                file_name = %exported.file_name,
                rows_written = exported.report.rows_written,
                duration_us = start_time.elapsed().as_micros(),
                "Export completed successfully"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        content_disposition(&exported.file_name),
                    ),
                ],
                exported.bytes,
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Export failed"
            );
            error_response(err)
        }
    }
}

/// Maps a body extraction failure to a 400 response.
fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
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

    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn error_response(error: impl Into<ApiErrorResponse>) -> Response {
    let api_error: ApiErrorResponse = error.into();
    api_error.into_response()
}

fn check_period(correlation_id: Uuid, year: i32, month: u32) -> Result<(), Response> {
    if NaiveDate::from_ymd_opt(year, month, 1).is_some() {
        return Ok(());
    }

    warn!(correlation_id = %correlation_id, year, month, "Invalid period");
    Err((
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(ApiError::new(
            "INVALID_PERIOD",
            format!("{}-{} is not a valid year and month", year, month),
        )),
    )
        .into_response())
}

/// `Content-Disposition` with an ASCII fallback and the UTF-8 name (RFC 5987).
fn content_disposition(file_name: &str) -> String {
    let encoded: String = file_name
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                char::from(b).to_string()
            }
            _ => format!("%{:02X}", b),
        })
        .collect();

    format!(
        "attachment; filename=\"timesheet.xlsx\"; filename*=UTF-8''{}",
        encoded
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_disposition_encodes_utf8() {
        let value = content_disposition("令和7年4月_A.xlsx");
        assert!(value.starts_with("attachment; filename=\"timesheet.xlsx\"; filename*=UTF-8''"));
        assert!(value.ends_with("%E4%BB%A4%E5%92%8C7%E5%B9%B44%E6%9C%88_A.xlsx"));
    }

    #[test]
    fn test_check_period() {
        assert!(check_period(Uuid::nil(), 2025, 4).is_ok());
        assert!(check_period(Uuid::nil(), 2025, 13).is_err());
    }
}
