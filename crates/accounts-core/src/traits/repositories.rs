//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the storage backends
//! provide the implementation. Every method is a single atomic operation
//! against the backend.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{NewToken, NewUser, Token, User, UserChanges};
use crate::error::DomainError;
use crate::value_objects::{TokenId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user, returning it with its assigned id
    async fn create(&self, user: &NewUser) -> RepoResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Get user by ID, failing with `UserNotFound` if absent
    async fn get(&self, id: UserId) -> RepoResult<User> {
        self.find_by_id(id)
            .await?
            .ok_or(DomainError::UserNotFound(id))
    }

    /// Check whether a user with this ID exists
    async fn exists(&self, id: UserId) -> RepoResult<bool>;

    /// List users ordered by ID, optionally only active ones
    async fn list(&self, active_only: bool) -> RepoResult<Vec<User>>;

    /// Apply changes to an existing user
    async fn update(&self, id: UserId, changes: &UserChanges) -> RepoResult<User>;

    /// Delete a user. Tokens that reference it are left in place.
    async fn delete(&self, id: UserId) -> RepoResult<()>;
}

// ============================================================================
// Token Repository
// ============================================================================

#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Insert a new unused token, returning it with its assigned id
    async fn create(&self, token: &NewToken) -> RepoResult<Token>;

    /// Find token by ID
    async fn find_by_id(&self, id: TokenId) -> RepoResult<Option<Token>>;

    /// Get token by ID, failing with `TokenNotFound` if absent
    async fn get(&self, id: TokenId) -> RepoResult<Token> {
        self.find_by_id(id)
            .await?
            .ok_or(DomainError::TokenNotFound(id))
    }

    /// List all tokens issued to a user, ordered by ID
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<Token>>;

    /// Find the most recently issued unused token of a user with this code
    async fn find_unused(&self, user_id: UserId, code: &str) -> RepoResult<Option<Token>>;

    /// Set `used_at` on an unused token
    ///
    /// Fails with `TokenAlreadyUsed` if it was consumed before.
    async fn mark_used(&self, id: TokenId, used_at: DateTime<Utc>) -> RepoResult<Token>;

    /// Delete a token
    async fn delete(&self, id: TokenId) -> RepoResult<()>;
}
