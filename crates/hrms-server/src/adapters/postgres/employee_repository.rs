//! PostgreSQL implementation of EmployeeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use hrms::{DomainError, Employee, EmployeeRepository, NewEmployee};

use super::errors::{insert_error, repository_error};

/// PostgreSQL implementation of EmployeeRepository
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct EmployeeRow {
    id: Uuid,
    employee_id: String,
    full_name: String,
    email: String,
    department: String,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: row.id,
            employee_id: row.employee_id,
            full_name: row.full_name,
            email: row.email,
            department: row.department,
        }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, DomainError> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            "SELECT id, employee_id, full_name, email, department FROM employees",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn exists_by_employee_id(&self, employee_id: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM employees WHERE employee_id = $1)",
        )
        .bind(employee_id)
        .fetch_one(&self.pool)
        .await
        .map_err(repository_error)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM employees WHERE email = $1)")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(repository_error)
    }

    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, DomainError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            INSERT INTO employees (employee_id, full_name, email, department)
            VALUES ($1, $2, $3, $4)
            RETURNING id, employee_id, full_name, email, department
            "#,
        )
        .bind(employee.employee_id())
        .bind(employee.full_name())
        .bind(employee.email())
        .bind(employee.department())
        .fetch_one(&self.pool)
        .await
        .map_err(insert_error)?;

        Ok(row.into())
    }

    async fn delete_by_employee_id(&self, employee_id: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM employees WHERE employee_id = $1")
            .bind(employee_id)
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(result.rows_affected() > 0)
    }
}
