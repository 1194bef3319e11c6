//! PostgreSQL implementation of TokenRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{instrument, warn};
use validator::Validate;

use accounts_core::entities::{NewToken, Token};
use accounts_core::error::DomainError;
use accounts_core::traits::{RepoResult, TokenRepository};
use accounts_core::value_objects::{TokenId, UserId};

use crate::models::TokenModel;

use super::error::{map_db_error, token_not_found};

/// PostgreSQL implementation of TokenRepository
#[derive(Clone)]
pub struct PgTokenRepository {
    pool: PgPool,
}

impl PgTokenRepository {
    /// Create a new PgTokenRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenRepository for PgTokenRepository {
    #[instrument(skip(self, token), fields(user_id = %token.user_id))]
    async fn create(&self, token: &NewToken) -> RepoResult<Token> {
        token.validate()?;

        let model = sqlx::query_as::<_, TokenModel>(
            r"
            INSERT INTO tokens (user_id, token, created_at)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, token, created_at, used_at
            ",
        )
        .bind(token.user_id.into_inner())
        .bind(&token.token)
        .bind(token.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Token::from(model))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: TokenId) -> RepoResult<Option<Token>> {
        let result = sqlx::query_as::<_, TokenModel>(
            r"
            SELECT id, user_id, token, created_at, used_at
            FROM tokens
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Token::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<Token>> {
        let result = sqlx::query_as::<_, TokenModel>(
            r"
            SELECT id, user_id, token, created_at, used_at
            FROM tokens
            WHERE user_id = $1
            ORDER BY id
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Token::from).collect())
    }

    #[instrument(skip(self, code))]
    async fn find_unused(&self, user_id: UserId, code: &str) -> RepoResult<Option<Token>> {
        let result = sqlx::query_as::<_, TokenModel>(
            r"
            SELECT id, user_id, token, created_at, used_at
            FROM tokens
            WHERE user_id = $1 AND token = $2 AND used_at IS NULL
            ORDER BY created_at DESC, id DESC
            LIMIT 1
            ",
        )
        .bind(user_id.into_inner())
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Token::from))
    }

    #[instrument(skip(self))]
    async fn mark_used(&self, id: TokenId, used_at: DateTime<Utc>) -> RepoResult<Token> {
        // Conditional update: only one caller can move the row out of the unused state
        let result = sqlx::query_as::<_, TokenModel>(
            r"
            UPDATE tokens
            SET used_at = $2
            WHERE id = $1 AND used_at IS NULL AND created_at <= $2
            RETURNING id, user_id, token, created_at, used_at
            ",
        )
        .bind(id.into_inner())
        .bind(used_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        if let Some(model) = result {
            return Ok(Token::from(model));
        }

        // Nothing updated: find out why
        let mut current = self.find_by_id(id).await?.ok_or_else(|| token_not_found(id))?;
        match current.mark_used(used_at) {
            Err(e) => Err(e),
            Ok(()) => {
                warn!(token_id = %id, "Token changed state while being marked used");
                Err(DomainError::InternalError(format!(
                    "token {id} changed state while being marked used"
                )))
            }
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: TokenId) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM tokens
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(token_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgTokenRepository>();
    }
}
