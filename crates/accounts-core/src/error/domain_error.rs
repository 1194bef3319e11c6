//! Domain errors - error types for the domain layer

use thiserror::Error;
use validator::ValidationErrors;

use crate::value_objects::{TokenId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Token not found: {0}")]
    TokenNotFound(TokenId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Token already used: {0}")]
    TokenAlreadyUsed(TokenId),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Get an error code string for callers that need a stable identifier
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::TokenNotFound(_) => "UNKNOWN_TOKEN",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::TokenAlreadyUsed(_) => "TOKEN_ALREADY_USED",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::TokenNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::TokenAlreadyUsed(_))
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{field}: {}", e.code),
                })
            })
            .collect();
        messages.sort();

        Self::ValidationError(messages.join("; "))
    }
}
