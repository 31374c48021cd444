//! Error types for quill.

use thiserror::Error;

/// Result type alias using quill's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for quill operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// Authentication failed (missing or malformed credential)
    #[error("{0}")]
    Unauthorized(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_not_found() {
        let err = Error::NotFound("Couldn't get user".to_string());
        assert_eq!(err.to_string(), "Couldn't get user");
    }

    #[test]
    fn test_error_display_unauthorized() {
        let err = Error::Unauthorized("no authorization header included".to_string());
        assert_eq!(err.to_string(), "no authorization header included");
    }

    #[test]
    fn test_error_display_invalid_input() {
        let err = Error::InvalidInput("name is required".to_string());
        assert_eq!(err.to_string(), "Invalid input: name is required");
    }

    #[test]
    fn test_error_display_config() {
        let err = Error::Config("DATABASE_URL is not set".to_string());
        assert_eq!(err.to_string(), "Configuration error: DATABASE_URL is not set");
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<i32>("not a number").unwrap_err();
        let err: Error = json_err.into();
        match err {
            Error::Serialization(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected Serialization error"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        match err {
            Error::Io(_) => {}
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }
}
