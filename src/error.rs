//! Error types for taskboard
//!
//! HTTP status per error class:
//! - 400: Validation failures (bad field values, malformed bodies)
//! - 404: Referenced task or category does not exist
//! - 500: Storage failures (unreadable/corrupt documents, lock timeouts)
//!
//! Exit codes for the CLI:
//! - 2: User error (bad config, bad arguments)
//! - 4: Operation failed (I/O, serialization)

use std::path::PathBuf;

use axum::http::StatusCode;
use thiserror::Error;

/// Exit codes for the taskboard CLI
pub mod exit_codes {
    pub const USER_ERROR: i32 = 2;
    pub const OPERATION_FAILED: i32 = 4;
}

/// A rejected field value. One variant per rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title is required")]
    TitleRequired,

    #[error("Title cannot be empty")]
    TitleEmpty,

    #[error("Title must be 100 characters or less")]
    TitleTooLong,

    #[error("Description must be 500 characters or less")]
    DescriptionTooLong,

    #[error("Description must be a string")]
    InvalidDescription,

    #[error("Invalid deadline date")]
    InvalidDeadline,

    #[error("Invalid status")]
    InvalidStatus,

    #[error("Category name is required")]
    NameRequired,

    #[error("Category name must be 50 characters or less")]
    NameTooLong,

    #[error("Category name already exists")]
    DuplicateName,

    #[error("Category color must be a string")]
    InvalidColor,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

/// Main error type for taskboard operations
#[derive(Error, Debug)]
pub enum Error {
    // Client errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Task not found")]
    TaskNotFound(String),

    #[error("Category not found")]
    CategoryNotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Storage / operation failures
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Lock acquisition failed: {0}")]
    LockFailed(PathBuf),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

impl Error {
    /// HTTP status for this error when it reaches the request boundary
    pub fn http_status(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::TaskNotFound(_) | Error::CategoryNotFound(_) => StatusCode::NOT_FOUND,
            Error::InvalidConfig(_)
            | Error::Io(_)
            | Error::Json(_)
            | Error::TomlParse(_)
            | Error::TomlSerialize(_)
            | Error::LockFailed(_)
            | Error::OperationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Validation(_)
            | Error::TaskNotFound(_)
            | Error::CategoryNotFound(_)
            | Error::InvalidConfig(_)
            | Error::TomlParse(_) => exit_codes::USER_ERROR,

            Error::Io(_)
            | Error::Json(_)
            | Error::TomlSerialize(_)
            | Error::LockFailed(_)
            | Error::OperationFailed(_) => exit_codes::OPERATION_FAILED,
        }
    }

    /// True for failures caused by the request rather than the server
    pub fn is_client_error(&self) -> bool {
        self.http_status().is_client_error()
    }
}

/// Result type alias for taskboard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wire body for every error response: `{ "error": "<message>" }`
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct JsonError {
    pub error: String,
}

impl From<&Error> for JsonError {
    fn from(err: &Error) -> Self {
        JsonError {
            error: err.to_string(),
        }
    }
}
