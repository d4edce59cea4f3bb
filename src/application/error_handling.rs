// src/application/error_handling.rs
//
// Error Handling for HTTP handlers
//
// ARCHITECTURE:
// - Maps internal errors → status code + JSON body
// - Never exposes internal implementation details
// - Logs errors for debugging

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Resource not found (404)
    NotFound,

    /// Invalid input or broken domain rule (422)
    Validation,

    /// Database/persistence error (500)
    Database,

    /// Other/unknown error (500)
    Internal,
}

impl ErrorType {
    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorType::NotFound => StatusCode::NOT_FOUND,
            ErrorType::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorType::Database | ErrorType::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ErrorResponse {
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::NotFound => Self::not_found("Resource"),

            AppError::Validation(errors) => Self {
                success: false,
                error_type: ErrorType::Validation,
                message: "Validation failed".to_string(),
                details: Some(errors.to_string()),
            },

            AppError::Database(db_error) => {
                log::error!("Database error: {:?}", db_error);
                Self::internal(ErrorType::Database, "Database operation failed")
            }

            AppError::Pool(pool_error) => {
                log::error!("Connection pool error: {}", pool_error);
                Self::internal(ErrorType::Database, "Database connection failed")
            }

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);
                Self::internal(ErrorType::Internal, "Data serialization failed")
            }

            AppError::Io(io_error) => {
                log::error!("IO error: {:?}", io_error);
                Self::internal(ErrorType::Internal, "File system operation failed")
            }

            AppError::Other(message) => {
                log::error!("Other error: {}", message);
                Self::internal(ErrorType::Internal, "Internal error")
            }
        }
    }

    pub fn not_found(resource: &str) -> Self {
        Self {
            success: false,
            error_type: ErrorType::NotFound,
            message: format!("{} not found", resource),
            details: None,
        }
    }

    fn internal(error_type: ErrorType, message: &str) -> Self {
        Self {
            success: false,
            error_type,
            message: message.to_string(),
            details: None,
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.error_type.status_code(), Json(self)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        ErrorResponse::from_app_error(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldErrors;

    #[test]
    fn test_not_found_error() {
        let error = ErrorResponse::from_app_error(AppError::NotFound);
        assert_eq!(error.error_type, ErrorType::NotFound);
        assert_eq!(error.message, "Resource not found");
        assert_eq!(error.error_type.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_error_keeps_field_details() {
        let mut errors = FieldErrors::new();
        errors.add("data", "Enter a valid date.");

        let error = ErrorResponse::from_app_error(AppError::Validation(errors));
        assert_eq!(error.error_type, ErrorType::Validation);
        assert_eq!(error.details.as_deref(), Some("data: Enter a valid date."));
        assert_eq!(
            error.error_type.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let error = ErrorResponse::from_app_error(AppError::Other("secret path".to_string()));
        assert_eq!(error.error_type.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!error.message.contains("secret"));
        assert!(error.details.is_none());
    }

    #[test]
    fn test_serialization() {
        let error = ErrorResponse::not_found("Coleta");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("not_found"));
        assert!(json.contains("Coleta not found"));
    }
}
