//! In-memory implementation of TokenRepository

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::instrument;
use validator::Validate;

use accounts_core::entities::{NewToken, Token};
use accounts_core::error::DomainError;
use accounts_core::traits::{RepoResult, TokenRepository};
use accounts_core::value_objects::{TokenId, UserId};

/// In-memory implementation of TokenRepository
#[derive(Debug)]
pub struct MemoryTokenRepository {
    tokens: DashMap<TokenId, Token>,
    next_id: AtomicI64,
}

impl MemoryTokenRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            tokens: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if no tokens are stored
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for MemoryTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenRepository for MemoryTokenRepository {
    #[instrument(skip(self, token), fields(user_id = %token.user_id))]
    async fn create(&self, token: &NewToken) -> RepoResult<Token> {
        token.validate()?;

        let id = TokenId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let token = token.clone().into_token(id);
        self.tokens.insert(id, token.clone());

        Ok(token)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: TokenId) -> RepoResult<Option<Token>> {
        Ok(self.tokens.get(&id).map(|entry| entry.value().clone()))
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<Token>> {
        let mut tokens: Vec<Token> = self
            .tokens
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        tokens.sort_by_key(|t| t.id);

        Ok(tokens)
    }

    #[instrument(skip(self, code))]
    async fn find_unused(&self, user_id: UserId, code: &str) -> RepoResult<Option<Token>> {
        Ok(self
            .tokens
            .iter()
            .filter(|entry| entry.user_id == user_id && !entry.is_used() && entry.matches(code))
            .max_by_key(|entry| (entry.created_at, entry.id))
            .map(|entry| entry.value().clone()))
    }

    #[instrument(skip(self))]
    async fn mark_used(&self, id: TokenId, used_at: DateTime<Utc>) -> RepoResult<Token> {
        // The shard lock held by `get_mut` makes check-and-set atomic
        let mut entry = self
            .tokens
            .get_mut(&id)
            .ok_or(DomainError::TokenNotFound(id))?;

        entry.mark_used(used_at)?;

        Ok(entry.value().clone())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: TokenId) -> RepoResult<()> {
        self.tokens
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::TokenNotFound(id))
    }
}
