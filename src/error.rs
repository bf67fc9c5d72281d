//! Error types for BookDash

use thiserror::Error;

use crate::validation::FieldErrors;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(FieldErrors),

    /// A value outside a closed set, or a field the record does not have.
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Any failure at the data-source boundary (transport, status, payload).
    #[error("Remote error: {0}")]
    Remote(String),

    #[error("Busy: {0}")]
    Busy(String),

    #[error("Request cancelled: page was unmounted")]
    Cancelled,

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Field errors carried by a validation failure, if any
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AppError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
