use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::forms::FormError;
use crate::store::StoreError;
use crate::utils::response::error as error_response;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] FormError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Internal server error")]
    InternalServerError(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::NotFound(err.to_string())
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    fn log(&self) {
        match self {
            AppError::ValidationError(err) => warn!(error = %err, "Rejected form input"),
            AppError::BadRequest(msg) | AppError::NotFound(msg) => {
                warn!(code = self.code(), message = %msg, "Request failed")
            }
            AppError::InternalServerError(msg) => {
                error!(error = ?self, message = %msg, "Application error")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        self.log();

        let (public_message, details) = match &self {
            AppError::ValidationError(err) => (err.to_string(), Some(field_details(err))),
            AppError::BadRequest(msg) | AppError::NotFound(msg) => (msg.clone(), None),
            AppError::InternalServerError(_) => ("An internal error occurred".to_string(), None),
        };

        error_response(code, public_message, details, status)
    }
}

/// Names the offending form field so the client can highlight it.
fn field_details(err: &FormError) -> serde_json::Value {
    let field = match err {
        FormError::Required(field)
        | FormError::InvalidDate { field, .. }
        | FormError::InvalidTime { field, .. }
        | FormError::BelowMinimum { field, .. }
        | FormError::InvalidChoice { field, .. } => *field,
    };
    json!({ "field": field })
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_status_codes() {
        let err = AppError::from(FormError::Required("title"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "VALIDATION_ERROR");

        let err = AppError::from(StoreError::EventNotFound(Uuid::nil()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err = AppError::InternalServerError("worker panicked".into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_field_details() {
        let details = field_details(&FormError::BelowMinimum {
            field: "capacity",
            min: 1,
        });
        assert_eq!(details["field"], "capacity");
    }
}
