//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! the employee and attendance repositories.

mod attendance_service;
mod employee_service;

pub use attendance_service::AttendanceService;
pub use employee_service::EmployeeService;
