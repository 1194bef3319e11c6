//! Token service
//!
//! Issues one-time codes to existing users and consumes them.

use accounts_common::{AppError, AppResult};
use accounts_core::entities::Token;
use accounts_core::{DomainError, TokenId, UserId};
use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use crate::dto::IssueTokenRequest;

use super::context::ServiceContext;

/// Token service
pub struct TokenService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TokenService<'a> {
    /// Create a new TokenService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Issue a token to an existing user
    ///
    /// The code defaults to a random 6-digit string and `created_at` to now.
    #[instrument(skip(self, request), fields(user_id = %request.user_id))]
    pub async fn issue(&self, request: IssueTokenRequest) -> AppResult<Token> {
        request.validate().map_err(DomainError::from)?;

        // The storage layer does not enforce the reference, so check it here
        if !self.ctx.user_repo().exists(request.user_id).await? {
            return Err(DomainError::UserNotFound(request.user_id).into());
        }

        let token = self
            .ctx
            .token_repo()
            .create(&request.into_new_token(super::now()))
            .await?;

        info!(token_id = %token.id, user_id = %token.user_id, "Token issued");
        Ok(token)
    }

    /// Get token by ID
    #[instrument(skip(self))]
    pub async fn get(&self, token_id: TokenId) -> AppResult<Token> {
        Ok(self.ctx.token_repo().get(token_id).await?)
    }

    /// List every token issued to a user, used or not
    #[instrument(skip(self))]
    pub async fn list_for_user(&self, user_id: UserId) -> AppResult<Vec<Token>> {
        Ok(self.ctx.token_repo().find_by_user(user_id).await?)
    }

    /// Mark a token used; `used_at` defaults to now
    ///
    /// A token can be consumed once. Later calls fail with `TokenAlreadyUsed`
    /// and keep the first `used_at`.
    #[instrument(skip(self))]
    pub async fn consume(
        &self,
        token_id: TokenId,
        used_at: Option<DateTime<Utc>>,
    ) -> AppResult<Token> {
        let used_at = used_at.unwrap_or_else(super::now);

        match self.ctx.token_repo().mark_used(token_id, used_at).await {
            Ok(token) => {
                info!(token_id = %token_id, user_id = %token.user_id, "Token consumed");
                Ok(token)
            }
            Err(e @ DomainError::TokenAlreadyUsed(_)) => {
                warn!(token_id = %token_id, "Attempt to reuse consumed token");
                Err(e.into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Consume the newest unused token of `user_id` whose code matches
    #[instrument(skip(self, code))]
    pub async fn redeem(&self, user_id: UserId, code: &str) -> AppResult<Token> {
        let Some(token) = self.ctx.token_repo().find_unused(user_id, code).await? else {
            debug!(user_id = %user_id, "No unused token matches the submitted code");
            return Err(AppError::not_found(format!(
                "unused token for user {user_id}"
            )));
        };

        self.consume(token.id, None).await
    }

    /// Delete a token
    #[instrument(skip(self))]
    pub async fn delete(&self, token_id: TokenId) -> AppResult<()> {
        self.ctx.token_repo().delete(token_id).await?;
        info!(token_id = %token_id, "Token deleted");
        Ok(())
    }
}
