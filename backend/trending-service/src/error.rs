/// Error types for the trending service
///
/// Errors are converted to the HTTP responses of the public contract.
/// Server-side failures always render the generic body so internal detail
/// is logged but never leaked to clients.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use std::fmt;

use trending_core::ScoreError;

/// Result type for trending-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// Database operation failed
    Database(String),

    /// Cache operation failed
    Cache(String),

    /// Bad request
    BadRequest(String),

    /// Internal server error
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Database(msg) => write!(f, "Database error: {}", msg),
            AppError::Cache(msg) => write!(f, "Cache error: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Cache(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::BadRequest(msg) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": msg,
            })),
            _ => HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Internal server error",
            })),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<redis::RedisError> for AppError {
    fn from(err: redis::RedisError) -> Self {
        AppError::Cache(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<ScoreError> for AppError {
    fn from(err: ScoreError) -> Self {
        match err {
            ScoreError::InvalidPage(_) => AppError::BadRequest(err.to_string()),
            // Negative counts or broken timestamps mean corrupted upstream
            // data, not a caller mistake.
            ScoreError::NegativeCount { .. } | ScoreError::InvalidTimestamp(_) => {
                AppError::Internal(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;

    fn body_json(err: &AppError) -> serde_json::Value {
        let body = err.error_response().into_body().try_into_bytes().unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[test]
    fn bad_request_exposes_its_message() {
        let err = AppError::BadRequest("City and country are required".to_string());

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(&err),
            serde_json::json!({ "error": "City and country are required" })
        );
    }

    #[test]
    fn server_errors_render_generic_body() {
        for err in [
            AppError::Database("connection refused on 10.0.0.3".to_string()),
            AppError::Cache("redis timeout".to_string()),
            AppError::Internal("scoring bug".to_string()),
        ] {
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(
                body_json(&err),
                serde_json::json!({ "error": "Internal server error" })
            );
        }
    }

    #[test]
    fn invalid_page_maps_to_bad_request() {
        let err: AppError = ScoreError::InvalidPage(0).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn negative_count_maps_to_internal() {
        let err: AppError = ScoreError::NegativeCount {
            field: "likes",
            value: -3,
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
