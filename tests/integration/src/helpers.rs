//! Test helpers for integration tests
//!
//! Builds service contexts from the environment and cleans up the rows a
//! test created.

use accounts_core::{TokenId, UserId};
use accounts_service::ServiceContext;
use anyhow::Result;

/// Helper to check if test environment is available
pub fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Connect a service context to the configured database
pub async fn connect() -> Result<ServiceContext> {
    Ok(ServiceContext::from_env().await?)
}

/// Rows created by a test, removed on `cleanup`
#[derive(Debug, Default)]
pub struct Created {
    pub users: Vec<UserId>,
    pub tokens: Vec<TokenId>,
}

impl Created {
    /// Delete everything recorded, ignoring rows a test already removed
    pub async fn cleanup(self, ctx: &ServiceContext) {
        for token_id in self.tokens {
            ctx.tokens().delete(token_id).await.ok();
        }
        for user_id in self.users {
            ctx.users().delete(user_id).await.ok();
        }
    }
}
