//! HRMS Lite Domain Library
//!
//! Core domain types and interfaces for employee and attendance records.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and rules
//!   - `entities/`: Core domain models (Employee, AttendanceRecord)
//!   - `value_objects/`: Immutable value types (AttendanceStatus)
//!   - `validation`: Structural checks that turn drafts into validated input
//!   - `errors`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use hrms::domain::{EmployeeDraft, NewEmployee};
//! use hrms::ports::{AttendanceRepository, EmployeeRepository};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    AttendanceDraft, AttendanceRecord, AttendanceStatus, DomainError, Employee, EmployeeDraft,
    FieldViolation, NewAttendance, NewEmployee, ValidationErrors,
};
pub use ports::{AttendanceRepository, EmployeeRepository};
