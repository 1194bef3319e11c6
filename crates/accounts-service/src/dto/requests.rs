//! Request DTOs
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Optional timestamps default to the time the service handles the request.

use accounts_core::{NewToken, NewUser, UserChanges, UserId};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// User Requests
// ============================================================================

/// Register a new user
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(length(min = 1, max = 50, message = "first_name must be 1-50 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50, message = "last_name must be 1-50 characters"))]
    pub last_name: String,

    /// Defaults to now
    #[serde(default)]
    pub joined_at: Option<DateTime<Utc>>,

    /// Defaults to true
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl RegisterUserRequest {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            joined_at: None,
            is_active: None,
        }
    }

    pub(crate) fn into_new_user(self, now: DateTime<Utc>) -> NewUser {
        NewUser::new(self.first_name, self.last_name, self.joined_at.unwrap_or(now))
            .with_active(self.is_active.unwrap_or(true))
    }
}

/// Update an existing user; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 50, message = "first_name must be 1-50 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 50, message = "last_name must be 1-50 characters"))]
    pub last_name: Option<String>,

    pub joined_at: Option<DateTime<Utc>>,

    pub is_active: Option<bool>,
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(request: UpdateUserRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            joined_at: request.joined_at,
            is_active: request.is_active,
        }
    }
}

// ============================================================================
// Token Requests
// ============================================================================

/// Issue a one-time token to a user
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct IssueTokenRequest {
    #[validate(custom(function = "accounts_core::validate_user_id"))]
    pub user_id: UserId,

    /// Defaults to a random 6-digit code
    #[validate(length(min = 1, max = 6, message = "token must be 1-6 characters"))]
    #[serde(default)]
    pub token: Option<String>,

    /// Defaults to now
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl IssueTokenRequest {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            token: None,
            created_at: None,
        }
    }

    /// Use a caller-chosen code instead of a generated one
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.token = Some(code.into());
        self
    }

    pub(crate) fn into_new_token(self, now: DateTime<Utc>) -> NewToken {
        let code = self
            .token
            .unwrap_or_else(accounts_core::generate_token_code);
        NewToken::issued_at(self.user_id, code, self.created_at.unwrap_or(now))
    }
}
