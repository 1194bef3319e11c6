//! In-memory implementation of UserRepository

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::instrument;
use validator::Validate;

use accounts_core::entities::{NewUser, User, UserChanges};
use accounts_core::error::DomainError;
use accounts_core::traits::{RepoResult, UserRepository};
use accounts_core::value_objects::UserId;

/// In-memory implementation of UserRepository
#[derive(Debug)]
pub struct MemoryUserRepository {
    users: DashMap<UserId, User>,
    next_id: AtomicI64,
}

impl MemoryUserRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Check if no users are stored
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for MemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    #[instrument(skip(self, user))]
    async fn create(&self, user: &NewUser) -> RepoResult<User> {
        user.validate()?;

        let id = UserId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let user = user.clone().into_user(id);
        self.users.insert(id, user.clone());

        Ok(user)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: UserId) -> RepoResult<bool> {
        Ok(self.users.contains_key(&id))
    }

    #[instrument(skip(self))]
    async fn list(&self, active_only: bool) -> RepoResult<Vec<User>> {
        let mut users: Vec<User> = self
            .users
            .iter()
            .filter(|entry| !active_only || entry.is_active)
            .map(|entry| entry.value().clone())
            .collect();
        users.sort_by_key(|u| u.id);

        Ok(users)
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, id: UserId, changes: &UserChanges) -> RepoResult<User> {
        let mut entry = self
            .users
            .get_mut(&id)
            .ok_or(DomainError::UserNotFound(id))?;

        entry.apply(changes)?;

        Ok(entry.value().clone())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: UserId) -> RepoResult<()> {
        self.users
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::UserNotFound(id))
    }
}
