//! AttendanceRecord - Daily attendance mark
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::AttendanceStatus;

/// Canonical calendar-date layout used on the wire and in storage
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Stored attendance mark
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Store-assigned opaque identifier
    pub id: Uuid,
    /// Business identifier of the employee, not an owning reference
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Attendance input that has passed structural validation.
///
/// Only obtainable through [`AttendanceDraft::validate`](crate::domain::AttendanceDraft::validate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAttendance {
    pub(crate) employee_id: String,
    pub(crate) date: NaiveDate,
    pub(crate) status: AttendanceStatus,
}

impl NewAttendance {
    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn status(&self) -> AttendanceStatus {
        self.status
    }

    /// Attach the identifier assigned by the store
    pub fn into_record(self, id: Uuid) -> AttendanceRecord {
        AttendanceRecord {
            id,
            employee_id: self.employee_id,
            date: self.date,
            status: self.status,
        }
    }
}

/// Render a date in its canonical storage form (`YYYY-MM-DD`)
pub fn canonical_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a date from its canonical storage form
pub fn parse_canonical_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
}

/// Order records newest first; records on the same day are ordered by `employee_id`.
pub fn sort_newest_first(records: &mut [AttendanceRecord]) {
    records.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| a.employee_id.cmp(&b.employee_id))
    });
}
