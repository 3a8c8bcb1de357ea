/*!
 * Error handling module
 *
 * Defines every error the service can produce and converts each of them
 * into the uniform failure envelope `{"status": false, "errMessage": ...}`.
 * The status code tells bad input (400), a missing resource (404) and a
 * storage or internal fault (500) apart.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result alias used by every fallible operation in the service
pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    /// Database operation error: connection failures, query errors,
    /// transaction failures
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failed during startup
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Request input could not be used: malformed JSON payload,
    /// non-numeric id, missing required query parameter
    #[error("Validation error: {0}")]
    Validation(String),

    /// The addressed record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Environment variable missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unexpected internal failure
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "status": false,
            "errMessage": self.to_string()
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = AppError::Validation("id is not a number".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::NotFound("book 42 not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_error_maps_to_500() {
        let response = AppError::Database(sqlx::Error::RowNotFound).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
