//! HRMS Lite API Routes
//!
//! - /api/employees - Employee directory
//! - /api/attendance - Attendance ledger

pub mod attendance;
pub mod employee;
pub mod swagger;
