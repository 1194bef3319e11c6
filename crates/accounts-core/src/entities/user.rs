//! User entity - represents an account holder

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::DomainError;
use crate::value_objects::UserId;

/// Maximum length (in characters) of `first_name` and `last_name`
pub const NAME_MAX_LEN: usize = 50;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub joined_at: DateTime<Utc>,
    pub is_active: bool,
}

impl User {
    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Mark the account inactive
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Mark the account active again
    pub fn activate(&mut self) {
        self.is_active = true;
    }

    /// Apply a validated set of changes in place
    ///
    /// Fields absent from `changes` are left untouched.
    pub fn apply(&mut self, changes: &UserChanges) -> Result<(), DomainError> {
        changes.validate()?;

        if let Some(first_name) = &changes.first_name {
            self.first_name.clone_from(first_name);
        }
        if let Some(last_name) = &changes.last_name {
            self.last_name.clone_from(last_name);
        }
        if let Some(joined_at) = changes.joined_at {
            self.joined_at = joined_at;
        }
        if let Some(is_active) = changes.is_active {
            self.is_active = is_active;
        }

        Ok(())
    }
}

/// Values for a user that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, max = 50, message = "first_name must be 1-50 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50, message = "last_name must be 1-50 characters"))]
    pub last_name: String,

    pub joined_at: DateTime<Utc>,

    pub is_active: bool,
}

impl NewUser {
    /// Create a new active user
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        joined_at: DateTime<Utc>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            joined_at,
            is_active: true,
        }
    }

    /// Override the initial active flag
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Build the stored entity once the backend has assigned an id
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            joined_at: self.joined_at,
            is_active: self.is_active,
        }
    }
}

/// Partial update of a stored user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UserChanges {
    #[validate(length(min = 1, max = 50, message = "first_name must be 1-50 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 50, message = "last_name must be 1-50 characters"))]
    pub last_name: Option<String>,

    pub joined_at: Option<DateTime<Utc>>,

    pub is_active: Option<bool>,
}

impl UserChanges {
    /// Changes that only toggle the active flag
    pub fn active(is_active: bool) -> Self {
        Self {
            is_active: Some(is_active),
            ..Self::default()
        }
    }

    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.joined_at.is_none()
            && self.is_active.is_none()
    }
}
