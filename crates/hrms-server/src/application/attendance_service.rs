//! Attendance Application Service (Use Case)
//!
//! The attendance ledger: one mark per employee per day, and every mark
//! must reference an existing employee at the time it is written.

use std::sync::Arc;

use hrms::{AttendanceDraft, AttendanceRecord, AttendanceRepository, DomainError, EmployeeRepository};

/// Application service for attendance operations
pub struct AttendanceService<A: AttendanceRepository + ?Sized, E: EmployeeRepository + ?Sized> {
    attendance: Arc<A>,
    employees: Arc<E>,
}

impl<A: AttendanceRepository + ?Sized, E: EmployeeRepository + ?Sized> AttendanceService<A, E> {
    pub fn new(attendance: Arc<A>, employees: Arc<E>) -> Self {
        Self {
            attendance,
            employees,
        }
    }

    async fn ensure_employee(&self, employee_id: &str) -> Result<(), DomainError> {
        if self.employees.exists_by_employee_id(employee_id).await? {
            Ok(())
        } else {
            Err(DomainError::employee_not_found(employee_id))
        }
    }

    /// Mark attendance for one employee on one day
    pub async fn mark(&self, draft: AttendanceDraft) -> Result<AttendanceRecord, DomainError> {
        let record = draft.validate()?;

        self.ensure_employee(record.employee_id()).await?;

        if self
            .attendance
            .exists_for_date(record.employee_id(), record.date())
            .await?
        {
            tracing::warn!(
                "Rejected attendance for {} on {}: already marked",
                record.employee_id(),
                record.date()
            );
            return Err(DomainError::attendance_already_marked());
        }

        let saved = self.attendance.insert(&record).await?;

        tracing::info!(
            "Marked attendance: {} on {} - {}",
            saved.employee_id,
            saved.date,
            saved.status
        );

        Ok(saved)
    }

    /// Get attendance for one employee, newest first
    pub async fn list_by_employee(
        &self,
        employee_id: &str,
    ) -> Result<Vec<AttendanceRecord>, DomainError> {
        self.ensure_employee(employee_id).await?;
        self.attendance.find_by_employee(employee_id).await
    }

    /// Get attendance for all employees, newest first
    pub async fn list_all(&self) -> Result<Vec<AttendanceRecord>, DomainError> {
        self.attendance.find_all().await
    }
}
