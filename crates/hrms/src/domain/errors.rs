//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

use super::validation::ValidationErrors;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    pub fn employee_not_found(employee_id: &str) -> Self {
        Self::not_found("Employee", employee_id)
    }

    pub fn employee_id_taken() -> Self {
        Self::Conflict("Employee ID already exists".to_string())
    }

    pub fn email_taken() -> Self {
        Self::Conflict("Email already exists".to_string())
    }

    pub fn attendance_already_marked() -> Self {
        Self::Conflict("Attendance already marked for this date".to_string())
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}
