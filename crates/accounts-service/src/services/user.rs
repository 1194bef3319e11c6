//! User service
//!
//! Handles account registration, profile changes and removal.

use accounts_common::AppResult;
use accounts_core::entities::{User, UserChanges};
use accounts_core::{DomainError, UserId};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{RegisterUserRequest, UpdateUserRequest};

use super::context::ServiceContext;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user; `joined_at` defaults to now
    #[instrument(skip(self, request))]
    pub async fn register(&self, request: RegisterUserRequest) -> AppResult<User> {
        request.validate().map_err(DomainError::from)?;

        let user = self
            .ctx
            .user_repo()
            .create(&request.into_new_user(super::now()))
            .await?;

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Get user by ID
    #[instrument(skip(self))]
    pub async fn get(&self, user_id: UserId) -> AppResult<User> {
        Ok(self.ctx.user_repo().get(user_id).await?)
    }

    /// List users, optionally only active ones
    #[instrument(skip(self))]
    pub async fn list(&self, active_only: bool) -> AppResult<Vec<User>> {
        Ok(self.ctx.user_repo().list(active_only).await?)
    }

    /// Update a user; an empty request returns the stored record unchanged
    #[instrument(skip(self, request))]
    pub async fn update(&self, user_id: UserId, request: UpdateUserRequest) -> AppResult<User> {
        request.validate().map_err(DomainError::from)?;

        let changes = UserChanges::from(request);
        if changes.is_empty() {
            return self.get(user_id).await;
        }

        let user = self.ctx.user_repo().update(user_id, &changes).await?;
        info!(user_id = %user_id, "User updated");
        Ok(user)
    }

    /// Deactivate a user account
    #[instrument(skip(self))]
    pub async fn deactivate(&self, user_id: UserId) -> AppResult<User> {
        let user = self
            .ctx
            .user_repo()
            .update(user_id, &UserChanges::active(false))
            .await?;

        info!(user_id = %user_id, "User deactivated");
        Ok(user)
    }

    /// Reactivate a user account
    #[instrument(skip(self))]
    pub async fn activate(&self, user_id: UserId) -> AppResult<User> {
        let user = self
            .ctx
            .user_repo()
            .update(user_id, &UserChanges::active(true))
            .await?;

        info!(user_id = %user_id, "User activated");
        Ok(user)
    }

    /// Delete a user. Tokens issued to it are not removed.
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: UserId) -> AppResult<()> {
        self.ctx.user_repo().delete(user_id).await?;
        info!(user_id = %user_id, "User deleted");
        Ok(())
    }
}
