//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Employee: Directory record keyed by a business identifier
//! - AttendanceRecord: Daily mark referencing an employee by `employee_id`

mod attendance;
mod employee;

pub use attendance::*;
pub use employee::*;
