//! sqlx error translation shared by the PostgreSQL repositories

use hrms::DomainError;

/// Any store failure that has no domain meaning
pub(super) fn repository_error(e: sqlx::Error) -> DomainError {
    DomainError::Repository(e.to_string())
}

/// Translate an insert failure, turning unique-constraint violations into
/// the same conflicts the services report from their pre-checks.
pub(super) fn insert_error(e: sqlx::Error) -> DomainError {
    let conflict = match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => match db.constraint() {
            Some("employees_employee_id_key") => Some(DomainError::employee_id_taken()),
            Some("employees_email_key") => Some(DomainError::email_taken()),
            Some("attendance_employee_id_date_key") => {
                Some(DomainError::attendance_already_marked())
            }
            _ => None,
        },
        _ => None,
    };

    conflict.unwrap_or_else(|| repository_error(e))
}
