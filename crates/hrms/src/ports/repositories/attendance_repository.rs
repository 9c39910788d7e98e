//! Attendance Repository Port
//!
//! Abstract interface for attendance persistence operations.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{errors::DomainError, AttendanceRecord, NewAttendance};

/// Repository interface for AttendanceRecord entities
#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Check if a mark exists for the exact (employee, date) pair
    async fn exists_for_date(&self, employee_id: &str, date: NaiveDate)
        -> Result<bool, DomainError>;

    /// Insert a validated mark; the store assigns the opaque `id`.
    ///
    /// A store-level uniqueness violation is reported as `DomainError::Conflict`.
    async fn insert(&self, record: &NewAttendance) -> Result<AttendanceRecord, DomainError>;

    /// Find all marks for one employee, newest date first
    async fn find_by_employee(&self, employee_id: &str)
        -> Result<Vec<AttendanceRecord>, DomainError>;

    /// Find all marks, newest date first, same-day marks ordered by `employee_id`
    async fn find_all(&self) -> Result<Vec<AttendanceRecord>, DomainError>;

    /// Delete every mark for an employee. Returns the number removed.
    async fn delete_by_employee(&self, employee_id: &str) -> Result<u64, DomainError>;
}
