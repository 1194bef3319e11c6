//! Token entity - a one-time code issued to a user

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::DomainError;
use crate::value_objects::{TokenId, UserId};

/// Maximum length (in characters) of a token code
pub const TOKEN_MAX_LEN: usize = 6;

/// Token entity
///
/// A token is either unused (`used_at` is `None`) or used. The transition
/// happens once, through [`Token::mark_used`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub id: TokenId,
    pub user_id: UserId,
    pub token: String,
    pub created_at: DateTime<Utc>,
    pub used_at: Option<DateTime<Utc>>,
}

impl Token {
    /// Check if the token has been consumed
    #[inline]
    pub fn is_used(&self) -> bool {
        self.used_at.is_some()
    }

    /// Check a submitted code against this token
    pub fn matches(&self, code: &str) -> bool {
        self.token == code
    }

    /// Consume the token at `used_at`
    ///
    /// Fails if the token is already used or if `used_at` predates
    /// `created_at`. On failure the token is left unchanged.
    pub fn mark_used(&mut self, used_at: DateTime<Utc>) -> Result<(), DomainError> {
        if self.is_used() {
            return Err(DomainError::TokenAlreadyUsed(self.id));
        }
        if used_at < self.created_at {
            return Err(DomainError::validation(
                "used_at must not be earlier than created_at",
            ));
        }

        self.used_at = Some(used_at);
        Ok(())
    }
}

/// Values for a token that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewToken {
    #[validate(custom(function = "validate_user_id"))]
    pub user_id: UserId,

    #[validate(length(min = 1, max = 6, message = "token must be 1-6 characters"))]
    pub token: String,

    pub created_at: DateTime<Utc>,
}

impl NewToken {
    /// Create a token issued now
    pub fn new(user_id: UserId, token: impl Into<String>) -> Self {
        Self::issued_at(user_id, token, Utc::now())
    }

    /// Create a token with an explicit creation time
    pub fn issued_at(user_id: UserId, token: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            token: token.into(),
            created_at,
        }
    }

    /// Build the stored entity once the backend has assigned an id
    pub fn into_token(self, id: TokenId) -> Token {
        Token {
            id,
            user_id: self.user_id,
            token: self.token,
            created_at: self.created_at,
            used_at: None,
        }
    }
}

/// Reject user ids that storage could never have assigned
pub fn validate_user_id(user_id: &UserId) -> Result<(), ValidationError> {
    if user_id.is_assigned() {
        return Ok(());
    }

    let mut error = ValidationError::new("user_id");
    error.message = Some(Cow::Borrowed("user_id is required"));
    Err(error)
}

/// Generate a random numeric code of [`TOKEN_MAX_LEN`] digits
pub fn generate_token_code() -> String {
    use rand::Rng;

    const CHARSET: &[u8] = b"0123456789";

    let mut rng = rand::thread_rng();
    (0..TOKEN_MAX_LEN)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_token() -> Token {
        NewToken::new(UserId::new(7), "123456").into_token(TokenId::new(1))
    }

    #[test]
    fn test_new_token_is_unused() {
        let token = sample_token();
        assert!(!token.is_used());
        assert_eq!(token.used_at, None);
        assert_eq!(token.user_id, UserId::new(7));
    }

    #[test]
    fn test_mark_used_once() {
        let mut token = sample_token();
        let at = token.created_at + Duration::seconds(30);

        token.mark_used(at).unwrap();
        assert_eq!(token.used_at, Some(at));

        let err = token.mark_used(at + Duration::seconds(1)).unwrap_err();
        assert!(matches!(err, DomainError::TokenAlreadyUsed(id) if id == TokenId::new(1)));
        assert_eq!(token.used_at, Some(at));
    }

    #[test]
    fn test_mark_used_before_creation_rejected() {
        let mut token = sample_token();
        let err = token
            .mark_used(token.created_at - Duration::seconds(1))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(!token.is_used());
    }

    #[test]
    fn test_token_length_limits() {
        assert!(NewToken::new(UserId::new(1), "123456").validate().is_ok());
        assert!(NewToken::new(UserId::new(1), "1").validate().is_ok());
        assert!(NewToken::new(UserId::new(1), "1234567").validate().is_err());
        assert!(NewToken::new(UserId::new(1), "").validate().is_err());
    }

    #[test]
    fn test_missing_user_id_rejected() {
        let err: DomainError = NewToken::new(UserId::default(), "123456")
            .validate()
            .unwrap_err()
            .into();
        assert!(err.is_validation());
        assert!(err.to_string().contains("user_id is required"));
    }

    #[test]
    fn test_matches() {
        let token = sample_token();
        assert!(token.matches("123456"));
        assert!(!token.matches("654321"));
    }

    #[test]
    fn test_generate_token_code() {
        let code = generate_token_code();
        assert_eq!(code.len(), TOKEN_MAX_LEN);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
        assert!(NewToken::new(UserId::new(1), code).validate().is_ok());
    }
}
