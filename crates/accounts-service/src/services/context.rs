//! Service context - dependency container for services
//!
//! Holds the repositories the services operate on.

use std::sync::Arc;

use accounts_common::{AppConfig, AppError, AppResult};
use accounts_core::traits::{TokenRepository, UserRepository};
use accounts_db::{
    apply_schema, create_pool, DatabaseConfig, MemoryTokenRepository, MemoryUserRepository,
    PgTokenRepository, PgUserRepository,
};
use tracing::{info, instrument};

use super::token::TokenService;
use super::user::UserService;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    token_repo: Arc<dyn TokenRepository>,
}

impl ServiceContext {
    /// Create a new service context from repositories
    pub fn new(user_repo: Arc<dyn UserRepository>, token_repo: Arc<dyn TokenRepository>) -> Self {
        Self {
            user_repo,
            token_repo,
        }
    }

    /// Context backed by the in-process store
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryUserRepository::new()),
            Arc::new(MemoryTokenRepository::new()),
        )
    }

    /// Connect to PostgreSQL, create the tables if needed, and build a context
    #[instrument(skip(config), fields(app = %config.app.name))]
    pub async fn connect(config: &AppConfig) -> AppResult<Self> {
        let db_config = DatabaseConfig::from(&config.database);
        let pool = create_pool(&db_config).await.map_err(AppError::database)?;
        apply_schema(&pool).await.map_err(AppError::database)?;

        info!(
            max_connections = db_config.max_connections,
            "Connected to PostgreSQL"
        );

        Ok(Self::new(
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgTokenRepository::new(pool)),
        ))
    }

    /// Load `AppConfig` from the environment (and `.env`), then [`Self::connect`]
    pub async fn from_env() -> AppResult<Self> {
        let config = AppConfig::from_env()?;
        Self::connect(&config).await
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the token repository
    pub fn token_repo(&self) -> &dyn TokenRepository {
        self.token_repo.as_ref()
    }

    // === Services ===

    /// User use cases
    pub fn users(&self) -> UserService<'_> {
        UserService::new(self)
    }

    /// Token use cases
    pub fn tokens(&self) -> TokenService<'_> {
        TokenService::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ServiceContext>();
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let ctx = ServiceContext::in_memory();
        let clone = ctx.clone();

        let user = ctx
            .users()
            .register(crate::dto::RegisterUserRequest::new("Ada", "Lovelace"))
            .await
            .unwrap();

        assert!(clone.user_repo().exists(user.id).await.unwrap());
    }
}
