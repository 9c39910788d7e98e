//! Error response bodies

use serde::Serialize;
use utoipa::ToSchema;

use hrms::FieldViolation;

/// Error response for conflicts, missing entities, and server errors
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Employee not found")]
    pub detail: String,
}

/// One rejected field
#[derive(Debug, Serialize, ToSchema)]
pub struct FieldViolationResponse {
    #[schema(example = "email")]
    pub field: String,
    #[schema(example = "Invalid email format")]
    pub message: String,
}

impl From<&FieldViolation> for FieldViolationResponse {
    fn from(v: &FieldViolation) -> Self {
        Self {
            field: v.field.clone(),
            message: v.message.clone(),
        }
    }
}

/// Error response for rejected input
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub detail: Vec<FieldViolationResponse>,
}
