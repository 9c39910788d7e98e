//! Employee Application Service (Use Case)
//!
//! The employee directory: uniqueness on create, cascade on delete.

use std::sync::Arc;

use hrms::{AttendanceRepository, DomainError, Employee, EmployeeDraft, EmployeeRepository};

/// Application service for Employee operations
pub struct EmployeeService<E: EmployeeRepository + ?Sized, A: AttendanceRepository + ?Sized> {
    employees: Arc<E>,
    attendance: Arc<A>,
}

impl<E: EmployeeRepository + ?Sized, A: AttendanceRepository + ?Sized> EmployeeService<E, A> {
    pub fn new(employees: Arc<E>, attendance: Arc<A>) -> Self {
        Self {
            employees,
            attendance,
        }
    }

    /// Get all employees
    pub async fn list_all(&self) -> Result<Vec<Employee>, DomainError> {
        self.employees.find_all().await
    }

    /// Create a new employee
    ///
    /// Identifier uniqueness is checked before email uniqueness, so a draft
    /// that collides on both reports the identifier.
    pub async fn create(&self, draft: EmployeeDraft) -> Result<Employee, DomainError> {
        let new_employee = draft.validate()?;

        if self
            .employees
            .exists_by_employee_id(new_employee.employee_id())
            .await?
        {
            tracing::warn!(
                "Rejected employee {}: employee ID already exists",
                new_employee.employee_id()
            );
            return Err(DomainError::employee_id_taken());
        }

        if self.employees.exists_by_email(new_employee.email()).await? {
            tracing::warn!(
                "Rejected employee {}: email already exists",
                new_employee.employee_id()
            );
            return Err(DomainError::email_taken());
        }

        let saved = self.employees.insert(&new_employee).await?;

        tracing::info!(
            "Created employee: {} ({}) - {}",
            saved.employee_id,
            saved.id,
            saved.department
        );

        Ok(saved)
    }

    /// Delete an employee and every attendance mark referencing it.
    ///
    /// Returns the number of attendance marks removed. The two deletes are
    /// not atomic: if the cascade fails the employee stays deleted and the
    /// error is returned.
    pub async fn delete(&self, employee_id: &str) -> Result<u64, DomainError> {
        if !self.employees.delete_by_employee_id(employee_id).await? {
            return Err(DomainError::employee_not_found(employee_id));
        }

        let removed = self
            .attendance
            .delete_by_employee(employee_id)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Deleted employee {} but attendance cascade failed: {}",
                    employee_id,
                    e
                );
                e
            })?;

        tracing::info!(
            "Deleted employee: {} ({} attendance records removed)",
            employee_id,
            removed
        );

        Ok(removed)
    }
}
