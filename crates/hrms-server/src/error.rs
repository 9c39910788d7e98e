//! HTTP error mapping
//!
//! Converts domain errors into status codes and JSON bodies.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use hrms::DomainError;

use crate::models::{ErrorResponse, FieldViolationResponse, ValidationErrorResponse};

/// Error returned by every handler
#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    /// Request body that could not be read as the expected JSON
    Body(JsonRejection),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

fn detail(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            detail: detail.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = match self {
            Self::Domain(err) => err,
            Self::Body(rejection) => {
                tracing::warn!("Rejected request body: {}", rejection.body_text());
                return detail(rejection.status(), rejection.body_text());
            }
        };

        match err {
            DomainError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationErrorResponse {
                    detail: errors.violations().iter().map(Into::into).collect(),
                }),
            )
                .into_response(),
            DomainError::Conflict(message) => detail(StatusCode::BAD_REQUEST, message),
            DomainError::NotFound { entity_type, .. } => {
                detail(StatusCode::NOT_FOUND, format!("{} not found", entity_type))
            }
            DomainError::Repository(message) => {
                tracing::error!("Repository error: {}", message);
                detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}
