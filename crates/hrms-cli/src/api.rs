//! HRMS Lite API Client

use anyhow::{bail, Context, Result};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

/// API Client for HRMS Lite
pub struct HrmsClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Types
// ============================================

#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeResponse {
    pub id: String,
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Serialize)]
pub struct CreateEmployeeRequest {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceResponse {
    pub employee_id: String,
    pub date: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct MarkAttendanceRequest {
    pub employee_id: String,
    pub date: String,
    pub status: String,
}

/// Turn an error response into the message shown to the user.
///
/// The server sends `{"detail": "..."}` or, for rejected input,
/// `{"detail": [{"field": "...", "message": "..."}]}`.
pub fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").cloned());

    match detail {
        Some(serde_json::Value::String(message)) => message,
        Some(serde_json::Value::Array(violations)) => violations
            .iter()
            .map(|v| {
                format!(
                    "{}: {}",
                    v["field"].as_str().unwrap_or("?"),
                    v["message"].as_str().unwrap_or("invalid")
                )
            })
            .collect::<Vec<_>>()
            .join("; "),
        _ if body.is_empty() => format!("API error ({})", status),
        _ => format!("API error ({}): {}", status, body),
    }
}

impl HrmsClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fail with the server's `detail` unless the response is a success
    async fn check(resp: Response) -> Result<Response> {
        if resp.status().is_success() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        bail!("{}", error_message(status, &body));
    }

    /// Test connection with liveness check
    pub async fn health(&self) -> Result<bool> {
        let resp = self.client.get(self.url("/health")).send().await?;
        Ok(resp.status().is_success())
    }

    /// List all employees
    pub async fn list_employees(&self) -> Result<Vec<EmployeeResponse>> {
        let resp = self
            .client
            .get(self.url("/api/employees"))
            .send()
            .await
            .context("Failed to connect to HRMS API")?;

        let employees: Vec<EmployeeResponse> = Self::check(resp)
            .await?
            .json()
            .await
            .context("Failed to parse response")?;

        Ok(employees)
    }

    /// Create an employee
    pub async fn create_employee(&self, request: &CreateEmployeeRequest) -> Result<EmployeeResponse> {
        let resp = self
            .client
            .post(self.url("/api/employees"))
            .json(request)
            .send()
            .await
            .context("Failed to connect to HRMS API")?;

        let employee: EmployeeResponse = Self::check(resp)
            .await?
            .json()
            .await
            .context("Failed to parse response")?;

        Ok(employee)
    }

    /// Delete an employee and their attendance
    pub async fn delete_employee(&self, employee_id: &str) -> Result<()> {
        let path = format!("/api/employees/{}", urlencoding::encode(employee_id));
        let resp = self
            .client
            .delete(self.url(&path))
            .send()
            .await
            .context("Failed to connect to HRMS API")?;

        Self::check(resp).await?;
        Ok(())
    }

    /// Mark attendance
    pub async fn mark_attendance(&self, request: &MarkAttendanceRequest) -> Result<AttendanceResponse> {
        let resp = self
            .client
            .post(self.url("/api/attendance"))
            .json(request)
            .send()
            .await
            .context("Failed to connect to HRMS API")?;

        let record: AttendanceResponse = Self::check(resp)
            .await?
            .json()
            .await
            .context("Failed to parse response")?;

        Ok(record)
    }

    /// List attendance, for one employee or for everyone
    pub async fn list_attendance(&self, employee_id: Option<&str>) -> Result<Vec<AttendanceResponse>> {
        let path = match employee_id {
            Some(id) => format!("/api/attendance/{}", urlencoding::encode(id)),
            None => "/api/attendance".to_string(),
        };
        let resp = self
            .client
            .get(self.url(&path))
            .send()
            .await
            .context("Failed to connect to HRMS API")?;

        let records: Vec<AttendanceResponse> = Self::check(resp)
            .await?
            .json()
            .await
            .context("Failed to parse response")?;

        Ok(records)
    }
}
