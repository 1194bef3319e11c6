//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use validator::Validate;

use accounts_core::entities::{NewUser, User, UserChanges};
use accounts_core::traits::{RepoResult, UserRepository};
use accounts_core::value_objects::UserId;

use crate::models::UserModel;

use super::error::{map_db_error, user_not_found};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self, user))]
    async fn create(&self, user: &NewUser) -> RepoResult<User> {
        user.validate()?;

        let model = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (first_name, last_name, joined_at, is_active)
            VALUES ($1, $2, $3, $4)
            RETURNING id, first_name, last_name, joined_at, is_active
            ",
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.joined_at)
        .bind(user.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(User::from(model))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, first_name, last_name, joined_at, is_active
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: UserId) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)
            ",
        )
        .bind(id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn list(&self, active_only: bool) -> RepoResult<Vec<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, first_name, last_name, joined_at, is_active
            FROM users
            WHERE is_active OR NOT $1
            ORDER BY id
            ",
        )
        .bind(active_only)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, id: UserId, changes: &UserChanges) -> RepoResult<User> {
        changes.validate()?;

        let result = sqlx::query_as::<_, UserModel>(
            r"
            UPDATE users
            SET first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                joined_at = COALESCE($4, joined_at),
                is_active = COALESCE($5, is_active)
            WHERE id = $1
            RETURNING id, first_name, last_name, joined_at, is_active
            ",
        )
        .bind(id.into_inner())
        .bind(&changes.first_name)
        .bind(&changes.last_name)
        .bind(changes.joined_at)
        .bind(changes.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(User::from).ok_or_else(|| user_not_found(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: UserId) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM users
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }
}
