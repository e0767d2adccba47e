//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Domain modules carry their own richer error enums; this type is the
/// common denominator surfaced at the application boundary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input rejected before any I/O was attempted.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found (non-fatal; callers degrade gracefully).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Business rule violation.
    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    /// Conflict (e.g., duplicate entry for a branch-date).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Backing store read/write failure (retryable).
    #[error("Store error: {0}")]
    Store(String),

    /// External service error.
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::NotFound(_) => 404,
            Self::BusinessRule(_) => 422,
            Self::Conflict(_) => 409,
            Self::Store(_) | Self::ExternalService(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::BusinessRule(_) => "BUSINESS_RULE_VIOLATION",
            Self::Conflict(_) => "CONFLICT",
            Self::Store(_) => "STORE_ERROR",
            Self::ExternalService(_) => "EXTERNAL_SERVICE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns true if retrying the same operation may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Store(_) | Self::ExternalService(_))
    }
}
