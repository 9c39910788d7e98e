//! PostgreSQL Repository Implementations

mod attendance_repository;
mod employee_repository;
mod errors;

pub use attendance_repository::PgAttendanceRepository;
pub use employee_repository::PgEmployeeRepository;
