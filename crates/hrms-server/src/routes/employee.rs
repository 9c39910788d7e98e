//! Employee Routes - Directory Management
//!
//! HTTP handlers that delegate to EmployeeService for business logic.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};

use crate::error::ApiError;
use crate::models::{
    CreateEmployeeRequest, EmployeeResponse, ErrorResponse, ValidationErrorResponse,
};
use crate::AppState;

/// List all employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "List of all employees", body = Vec<EmployeeResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Employees"
)]
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeResponse>>, ApiError> {
    let employees = state.employee_service.list_all().await?;

    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

/// Create new employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = EmployeeResponse),
        (status = 400, description = "Employee ID or email already exists", body = ErrorResponse),
        (status = 422, description = "Invalid input", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Employees"
)]
pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EmployeeResponse>), ApiError> {
    let Json(payload) = payload?;
    let employee = state.employee_service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(employee.into())))
}

/// Delete employee and their attendance
#[utoipa::path(
    delete,
    path = "/api/employees/{employee_id}",
    params(("employee_id" = String, Path, description = "Business employee ID")),
    responses(
        (status = 204, description = "Employee and attendance deleted"),
        (status = 404, description = "Employee not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Employees"
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.employee_service.delete(&employee_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/employees", get(list_employees).post(create_employee))
        .route("/api/employees/:employee_id", delete(delete_employee))
}
