//! In-memory implementations of the repository ports
//!
//! Mirror the PostgreSQL adapters, including their unique constraints, so
//! services and routes can be exercised without a database.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use uuid::Uuid;

use hrms::domain::sort_newest_first;
use hrms::{
    AttendanceRecord, AttendanceRepository, DomainError, Employee, EmployeeRepository,
    NewAttendance, NewEmployee,
};

#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    rows: RwLock<Vec<Employee>>,
    calls: AtomicUsize,
    stale_checks: AtomicBool,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of repository calls made so far
    pub fn store_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make existence checks miss every row, as when a concurrent writer
    /// commits between the check and the insert
    pub fn stale_checks(&self) {
        self.stale_checks.store(true, Ordering::SeqCst);
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    async fn exists(&self, matches: impl Fn(&Employee) -> bool) -> bool {
        !self.stale_checks.load(Ordering::SeqCst) && self.rows.read().await.iter().any(matches)
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, DomainError> {
        self.touch();
        Ok(self.rows.read().await.clone())
    }

    async fn exists_by_employee_id(&self, employee_id: &str) -> Result<bool, DomainError> {
        self.touch();
        Ok(self.exists(|e| e.employee_id == employee_id).await)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        self.touch();
        Ok(self.exists(|e| e.email == email).await)
    }

    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, DomainError> {
        self.touch();
        let mut rows = self.rows.write().await;
        if rows.iter().any(|e| e.employee_id == employee.employee_id()) {
            return Err(DomainError::employee_id_taken());
        }
        if rows.iter().any(|e| e.email == employee.email()) {
            return Err(DomainError::email_taken());
        }
        let saved = employee.clone().into_employee(Uuid::new_v4());
        rows.push(saved.clone());
        Ok(saved)
    }

    async fn delete_by_employee_id(&self, employee_id: &str) -> Result<bool, DomainError> {
        self.touch();
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|e| e.employee_id != employee_id);
        Ok(rows.len() < before)
    }
}

#[derive(Default)]
pub struct InMemoryAttendanceRepository {
    rows: RwLock<Vec<AttendanceRecord>>,
    calls: AtomicUsize,
    fail_deletes: AtomicBool,
    stale_checks: AtomicBool,
}

impl InMemoryAttendanceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of repository calls made so far
    pub fn store_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make every subsequent delete fail with a repository error
    pub fn fail_deletes(&self) {
        self.fail_deletes.store(true, Ordering::SeqCst);
    }

    /// Make the per-day check miss every record
    pub fn stale_checks(&self) {
        self.stale_checks.store(true, Ordering::SeqCst);
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl AttendanceRepository for InMemoryAttendanceRepository {
    async fn exists_for_date(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> Result<bool, DomainError> {
        self.touch();
        if self.stale_checks.load(Ordering::SeqCst) {
            return Ok(false);
        }
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .any(|r| r.employee_id == employee_id && r.date == date))
    }

    async fn insert(&self, record: &NewAttendance) -> Result<AttendanceRecord, DomainError> {
        self.touch();
        let mut rows = self.rows.write().await;
        if rows
            .iter()
            .any(|r| r.employee_id == record.employee_id() && r.date == record.date())
        {
            return Err(DomainError::attendance_already_marked());
        }
        let saved = record.clone().into_record(Uuid::new_v4());
        rows.push(saved.clone());
        Ok(saved)
    }

    async fn find_by_employee(
        &self,
        employee_id: &str,
    ) -> Result<Vec<AttendanceRecord>, DomainError> {
        self.touch();
        let mut records: Vec<AttendanceRecord> = self
            .rows
            .read()
            .await
            .iter()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect();
        sort_newest_first(&mut records);
        Ok(records)
    }

    async fn find_all(&self) -> Result<Vec<AttendanceRecord>, DomainError> {
        self.touch();
        let mut records = self.rows.read().await.clone();
        sort_newest_first(&mut records);
        Ok(records)
    }

    async fn delete_by_employee(&self, employee_id: &str) -> Result<u64, DomainError> {
        self.touch();
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(DomainError::Repository("attendance store unavailable".to_string()));
        }
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|r| r.employee_id != employee_id);
        Ok((before - rows.len()) as u64)
    }
}
