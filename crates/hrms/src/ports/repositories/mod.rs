//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod attendance_repository;
mod employee_repository;

pub use attendance_repository::*;
pub use employee_repository::*;
