//! Employee Repository Port
//!
//! Abstract interface for employee persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Employee, NewEmployee};

/// Repository interface for Employee entities
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find all employees in store order
    async fn find_all(&self) -> Result<Vec<Employee>, DomainError>;

    /// Check if an employee with this business identifier exists
    async fn exists_by_employee_id(&self, employee_id: &str) -> Result<bool, DomainError>;

    /// Check if an employee with this email exists
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Insert a validated employee; the store assigns the opaque `id`.
    ///
    /// A store-level uniqueness violation is reported as `DomainError::Conflict`.
    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, DomainError>;

    /// Delete by business identifier. Returns true if a record was deleted.
    async fn delete_by_employee_id(&self, employee_id: &str) -> Result<bool, DomainError>;
}
