//! Input Validation
//!
//! Drafts carry raw request input. Validation checks every field before
//! any store access and collects all violations, so a caller sees the
//! complete list of problems at once.

use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::Serialize;

use super::entities::{NewAttendance, NewEmployee, DATE_FORMAT};
use super::value_objects::AttendanceStatus;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

/// Four-digit year, zero-padded month and day. chrono's `%Y` alone also
/// takes signed and five-digit years, which break text ordering in the store.
const DATE_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

fn date_regex() -> &'static Regex {
    static DATE: OnceLock<Regex> = OnceLock::new();
    DATE.get_or_init(|| Regex::new(DATE_PATTERN).expect("date pattern compiles"))
}

/// Parse a `YYYY-MM-DD` calendar date with a year in 0001..=9999
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if !date_regex().is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .filter(|date| date.year() >= 1)
}

/// Whether `value` has the `local@domain.tld` shape
pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// A single rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// All violations found in one input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldViolation::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    /// Whether any violation concerns `field`
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl From<Vec<FieldViolation>> for ValidationErrors {
    fn from(violations: Vec<FieldViolation>) -> Self {
        Self(violations)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", v.field, v.message)?;
        }
        Ok(())
    }
}

fn require(errors: &mut ValidationErrors, field: &str, value: &str) -> bool {
    if value.trim().is_empty() {
        errors.push(field, "must not be empty");
        false
    } else {
        true
    }
}

/// Unvalidated employee input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl EmployeeDraft {
    pub fn validate(self) -> Result<NewEmployee, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        require(&mut errors, "employee_id", &self.employee_id);
        require(&mut errors, "full_name", &self.full_name);
        if require(&mut errors, "email", &self.email) && !is_valid_email(&self.email) {
            errors.push("email", "Invalid email format");
        }
        require(&mut errors, "department", &self.department);

        errors.into_result(|| NewEmployee {
            employee_id: self.employee_id,
            full_name: self.full_name,
            email: self.email,
            department: self.department,
        })
    }
}

/// Unvalidated attendance input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceDraft {
    pub employee_id: String,
    pub date: String,
    pub status: String,
}

impl AttendanceDraft {
    pub fn validate(self) -> Result<NewAttendance, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        require(&mut errors, "employee_id", &self.employee_id);

        let date = if require(&mut errors, "date", &self.date) {
            match parse_date(self.date.trim()) {
                Some(date) => Some(date),
                None => {
                    errors.push("date", "must be a valid date in YYYY-MM-DD format");
                    None
                }
            }
        } else {
            None
        };

        let status = match self.status.parse::<AttendanceStatus>() {
            Ok(status) => Some(status),
            Err(_) => {
                errors.push("status", "must be one of: Present, Absent");
                None
            }
        };

        match (date, status) {
            (Some(date), Some(status)) if errors.is_empty() => Ok(NewAttendance {
                employee_id: self.employee_id,
                date,
                status,
            }),
            _ => Err(errors),
        }
    }
}
