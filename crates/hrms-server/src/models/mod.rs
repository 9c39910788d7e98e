//! HRMS Lite Data Models
//!
//! Request/response DTOs for the REST API.
//! - Employee: Directory records
//! - Attendance: Daily marks
//! - Error: Error response bodies

mod attendance;
mod employee;
mod error;

pub use attendance::*;
pub use employee::*;
pub use error::*;
