//! Error handling utilities for repositories

use accounts_core::error::DomainError;
use accounts_core::value_objects::{TokenId, UserId};
use sqlx::Error as SqlxError;

/// SQLSTATE for "string data, right truncation" (value too long for column)
const STRING_DATA_RIGHT_TRUNCATION: &str = "22001";

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.code().as_deref() == Some(STRING_DATA_RIGHT_TRUNCATION) {
            return DomainError::ValidationError(db_err.message().to_string());
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: UserId) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "token not found" error
pub fn token_not_found(id: TokenId) -> DomainError {
    DomainError::TokenNotFound(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_error_maps_to_database_error() {
        let err = map_db_error(SqlxError::RowNotFound);
        assert!(matches!(err, DomainError::DatabaseError(_)));
        assert_eq!(err.code(), "DATABASE_ERROR");
    }

    #[test]
    fn test_not_found_helpers() {
        assert!(user_not_found(UserId::new(1)).is_not_found());
        assert!(token_not_found(TokenId::new(1)).is_not_found());
    }
}
