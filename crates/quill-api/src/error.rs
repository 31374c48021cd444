//! Handler-boundary error mapping.
//!
//! Every failure reaching a handler is classified into an explicit
//! kind here and converted to a JSON response; nothing escapes as a
//! bare 500 with no body, and nothing takes down the process.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

/// API-level error with a fixed HTTP status per kind.
#[derive(Debug)]
pub enum ApiError {
    /// Storage failure with no more specific classification.
    Database(quill_core::Error),
    /// Missing or malformed credential.
    Unauthorized(String),
    /// Resource (or key's owning user) does not exist.
    NotFound(String),
    /// Client sent something the handlers cannot act on.
    BadRequest(String),
    /// Write rejected by a uniqueness constraint.
    Conflict(String),
}

impl From<quill_core::Error> for ApiError {
    fn from(err: quill_core::Error) -> Self {
        match &err {
            quill_core::Error::NotFound(msg) => ApiError::NotFound(msg.clone()),
            quill_core::Error::Unauthorized(msg) => ApiError::Unauthorized(msg.clone()),
            quill_core::Error::InvalidInput(msg) => ApiError::BadRequest(msg.clone()),
            quill_core::Error::Database(sqlx_err) => {
                let msg = sqlx_err.to_string();
                // SQLite and PostgreSQL phrase constraint failures differently.
                if msg.contains("UNIQUE constraint failed") || msg.contains("duplicate key") {
                    return ApiError::Conflict(msg);
                }
                if msg.contains("FOREIGN KEY constraint failed") || msg.contains("foreign key") {
                    return ApiError::BadRequest(msg);
                }
                ApiError::Database(err)
            }
            _ => ApiError::Database(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::Database(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
