//! PostgreSQL implementation of AttendanceRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use hrms::domain::{canonical_date, parse_canonical_date};
use hrms::{
    AttendanceRecord, AttendanceRepository, AttendanceStatus, DomainError, NewAttendance,
};

use super::errors::{insert_error, repository_error};

/// PostgreSQL implementation of AttendanceRepository
pub struct PgAttendanceRepository {
    pool: PgPool,
}

impl PgAttendanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping; `date` and `status` are stored as text
#[derive(sqlx::FromRow)]
struct AttendanceRow {
    id: Uuid,
    employee_id: String,
    date: String,
    status: String,
}

impl TryFrom<AttendanceRow> for AttendanceRecord {
    type Error = DomainError;

    fn try_from(row: AttendanceRow) -> Result<Self, Self::Error> {
        let date = parse_canonical_date(&row.date).map_err(|e| {
            DomainError::Repository(format!(
                "attendance {} has bad date {:?}: {}",
                row.id, row.date, e
            ))
        })?;
        let status: AttendanceStatus = row.status.parse().map_err(|e: String| {
            DomainError::Repository(format!("attendance {}: {}", row.id, e))
        })?;

        Ok(Self {
            id: row.id,
            employee_id: row.employee_id,
            date,
            status,
        })
    }
}

fn into_records(rows: Vec<AttendanceRow>) -> Result<Vec<AttendanceRecord>, DomainError> {
    rows.into_iter().map(TryInto::try_into).collect()
}

#[async_trait]
impl AttendanceRepository for PgAttendanceRepository {
    async fn exists_for_date(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM attendance WHERE employee_id = $1 AND date = $2)",
        )
        .bind(employee_id)
        .bind(canonical_date(date))
        .fetch_one(&self.pool)
        .await
        .map_err(repository_error)
    }

    async fn insert(&self, record: &NewAttendance) -> Result<AttendanceRecord, DomainError> {
        let row = sqlx::query_as::<_, AttendanceRow>(
            r#"
            INSERT INTO attendance (employee_id, date, status)
            VALUES ($1, $2, $3)
            RETURNING id, employee_id, date, status
            "#,
        )
        .bind(record.employee_id())
        .bind(canonical_date(record.date()))
        .bind(record.status().as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(insert_error)?;

        row.try_into()
    }

    async fn find_by_employee(
        &self,
        employee_id: &str,
    ) -> Result<Vec<AttendanceRecord>, DomainError> {
        let rows = sqlx::query_as::<_, AttendanceRow>(
            r#"
            SELECT id, employee_id, date, status FROM attendance
            WHERE employee_id = $1
            ORDER BY date DESC
            "#,
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        into_records(rows)
    }

    async fn find_all(&self) -> Result<Vec<AttendanceRecord>, DomainError> {
        let rows = sqlx::query_as::<_, AttendanceRow>(
            "SELECT id, employee_id, date, status FROM attendance ORDER BY date DESC, employee_id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        into_records(rows)
    }

    async fn delete_by_employee(&self, employee_id: &str) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM attendance WHERE employee_id = $1")
            .bind(employee_id)
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(result.rows_affected())
    }
}
