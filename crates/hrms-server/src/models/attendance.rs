//! Attendance DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use hrms::{AttendanceDraft, AttendanceRecord};

/// Attendance status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl From<hrms::AttendanceStatus> for AttendanceStatus {
    fn from(status: hrms::AttendanceStatus) -> Self {
        match status {
            hrms::AttendanceStatus::Present => AttendanceStatus::Present,
            hrms::AttendanceStatus::Absent => AttendanceStatus::Absent,
        }
    }
}

/// Mark Attendance request
///
/// Fields are taken as raw strings so that bad dates and statuses are
/// reported per field by validation. Missing and `null` fields become empty.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct MarkAttendanceRequest {
    #[serde(default)]
    #[schema(example = "E1")]
    pub employee_id: Option<String>,
    /// Calendar date, YYYY-MM-DD
    #[serde(default)]
    #[schema(example = "2024-01-01")]
    pub date: Option<String>,
    /// Present or Absent
    #[serde(default)]
    #[schema(example = "Present")]
    pub status: Option<String>,
}

impl From<MarkAttendanceRequest> for AttendanceDraft {
    fn from(req: MarkAttendanceRequest) -> Self {
        Self {
            employee_id: req.employee_id.unwrap_or_default(),
            date: req.date.unwrap_or_default(),
            status: req.status.unwrap_or_default(),
        }
    }
}

/// Attendance response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AttendanceResponse {
    /// Store-generated identifier
    pub id: String,
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

impl From<AttendanceRecord> for AttendanceResponse {
    fn from(record: AttendanceRecord) -> Self {
        Self {
            id: record.id.to_string(),
            employee_id: record.employee_id,
            date: record.date,
            status: record.status.into(),
        }
    }
}
