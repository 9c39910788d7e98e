//! Infrastructure Adapters
//!
//! Implementations of domain ports for the record store.

#[cfg(test)]
pub mod memory;
pub mod postgres;

// Re-exports
pub use postgres::{PgAttendanceRepository, PgEmployeeRepository};
