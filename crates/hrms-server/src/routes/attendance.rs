//! Attendance Routes - Daily Marks
//!
//! HTTP handlers that delegate to AttendanceService for business logic.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::error::ApiError;
use crate::models::{
    AttendanceResponse, ErrorResponse, MarkAttendanceRequest, ValidationErrorResponse,
};
use crate::AppState;

/// List attendance for all employees, newest first
#[utoipa::path(
    get,
    path = "/api/attendance",
    responses(
        (status = 200, description = "All attendance records, date descending", body = Vec<AttendanceResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    State(state): State<AppState>,
) -> Result<Json<Vec<AttendanceResponse>>, ApiError> {
    let records = state.attendance_service.list_all().await?;

    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// Mark attendance
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = MarkAttendanceRequest,
    responses(
        (status = 201, description = "Attendance marked", body = AttendanceResponse),
        (status = 400, description = "Attendance already marked for this date", body = ErrorResponse),
        (status = 404, description = "Employee not found", body = ErrorResponse),
        (status = 422, description = "Invalid input", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    State(state): State<AppState>,
    payload: Result<Json<MarkAttendanceRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AttendanceResponse>), ApiError> {
    let Json(payload) = payload?;
    let record = state.attendance_service.mark(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(record.into())))
}

/// List attendance for one employee, newest first
#[utoipa::path(
    get,
    path = "/api/attendance/{employee_id}",
    params(("employee_id" = String, Path, description = "Business employee ID")),
    responses(
        (status = 200, description = "Employee attendance, date descending", body = Vec<AttendanceResponse>),
        (status = 404, description = "Employee not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Attendance"
)]
pub async fn list_employee_attendance(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Result<Json<Vec<AttendanceResponse>>, ApiError> {
    let records = state
        .attendance_service
        .list_by_employee(&employee_id)
        .await?;

    Ok(Json(records.into_iter().map(Into::into).collect()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/attendance", get(list_attendance).post(mark_attendance))
        .route("/api/attendance/:employee_id", get(list_employee_attendance))
}
