//! Application error types
//!
//! Unified error handling for callers of the account services.

use accounts_core::DomainError;
use std::fmt;

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Resource errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Get a stable error code
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Check if this is a "not found" error
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Domain(e) => e.is_not_found(),
            _ => false,
        }
    }

    /// Check if this is a validation error
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Domain(e) if e.is_validation())
    }

    /// Check if this is a conflict error
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Domain(e) if e.is_conflict())
    }

    /// Get the wrapped domain error, if any
    #[must_use]
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(e) => Some(e),
            _ => None,
        }
    }

    /// Create a not found error for a resource type
    #[must_use]
    pub fn not_found(resource: impl fmt::Display) -> Self {
        Self::NotFound(resource.to_string())
    }

    /// Create a database error
    #[must_use]
    pub fn database(msg: impl fmt::Display) -> Self {
        Self::Database(msg.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use accounts_core::{TokenId, UserId};

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::from(DomainError::validation("x")).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(AppError::not_found("user").error_code(), "NOT_FOUND");
        assert_eq!(
            AppError::from(DomainError::UserNotFound(UserId::new(1))).error_code(),
            "UNKNOWN_USER"
        );
        assert_eq!(
            AppError::from(ConfigError::MissingVar("DATABASE_URL")).error_code(),
            "CONFIG_ERROR"
        );
    }

    #[test]
    fn test_classification_delegates_to_domain() {
        let err = AppError::from(DomainError::TokenNotFound(TokenId::new(9)));
        assert!(err.is_not_found());
        assert!(!err.is_validation());

        let err = AppError::from(DomainError::validation("token must be 1-6 characters"));
        assert!(err.is_validation());

        let err = AppError::from(DomainError::TokenAlreadyUsed(TokenId::new(9)));
        assert!(err.is_conflict());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_domain_display_is_transparent() {
        let err = AppError::from(DomainError::UserNotFound(UserId::new(999_999)));
        assert_eq!(err.to_string(), "User not found: 999999");
        assert!(err.as_domain().is_some());
    }

    #[test]
    fn test_helper_methods() {
        let err = AppError::not_found("user 123");
        assert_eq!(err.to_string(), "Resource not found: user 123");

        let err = AppError::database("connection refused");
        assert_eq!(err.to_string(), "Database error: connection refused");
        assert_eq!(err.error_code(), "DATABASE_ERROR");
    }
}
