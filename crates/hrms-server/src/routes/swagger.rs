//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    AttendanceResponse, AttendanceStatus, CreateEmployeeRequest, EmployeeResponse, ErrorResponse,
    FieldViolationResponse, MarkAttendanceRequest, ValidationErrorResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Employee endpoints
        super::employee::list_employees,
        super::employee::create_employee,
        super::employee::delete_employee,
        // Attendance endpoints
        super::attendance::list_attendance,
        super::attendance::mark_attendance,
        super::attendance::list_employee_attendance,
    ),
    info(
        title = "HRMS Lite API",
        version = "0.1.0",
        description = "Employee directory and daily attendance records.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Employees", description = "Employee directory management"),
        (name = "Attendance", description = "Daily attendance marks"),
    ),
    components(
        schemas(
            // Employee
            CreateEmployeeRequest,
            EmployeeResponse,
            // Attendance
            AttendanceStatus,
            MarkAttendanceRequest,
            AttendanceResponse,
            // Errors
            ErrorResponse,
            FieldViolationResponse,
            ValidationErrorResponse,
        )
    ),
)]
pub struct ApiDoc;
