use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum AppError {
    /// Referenced entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A required field failed validation; nothing was written.
    #[error("{field}: {message}")]
    Validation {
        /// Form field the message belongs to.
        field: &'static str,
        /// User-facing message.
        message: String,
    },

    /// Mutation attempted without a logged-in user.
    #[error("Not logged in")]
    Unauthenticated,

    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal storage error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Shorthand for a validation failure on a named form field.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        AppError::Validation {
            field,
            message: message.into(),
        }
    }
}

/// Result type alias for the application.
pub type Result<T> = std::result::Result<T, AppError>;
