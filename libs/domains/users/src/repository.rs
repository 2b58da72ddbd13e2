use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{User, UserId, UserPayload};
use crate::validation::ValidUser;

/// Repository trait for User persistence
///
/// Writes take a [`ValidUser`], so format rules always hold for stored rows.
/// Implementations enforce email uniqueness themselves and report it as
/// [`UserError::EmailConflict`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user, assigning its id and timestamps
    async fn create(&self, user: ValidUser) -> UserResult<User>;

    /// Get a user by ID
    async fn find_by_id(&self, id: UserId) -> UserResult<Option<User>>;

    /// All users ordered by id
    async fn find_all(&self) -> UserResult<Vec<User>>;

    /// Overwrite name, email and phone. `None` when the id is unknown.
    async fn update(&self, id: UserId, user: ValidUser) -> UserResult<Option<User>>;

    /// Merge the supplied fields over the stored record, re-validate and write.
    /// `None` when the id is unknown.
    async fn patch(&self, id: UserId, changes: UserPayload) -> UserResult<Option<User>> {
        let Some(existing) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let merged = changes.merge_over(&existing).validate_fields()?;
        self.update(id, merged).await
    }

    /// Delete a user by ID, returning whether a row was removed
    async fn delete(&self, id: UserId) -> UserResult<bool>;

    /// Count all users
    async fn count(&self) -> UserResult<u64>;
}

#[derive(Debug, Default)]
struct Store {
    users: BTreeMap<UserId, User>,
    last_id: UserId,
}

impl Store {
    fn email_taken(&self, email: &str, except: Option<UserId>) -> bool {
        self.users
            .values()
            .any(|u| u.email == email && Some(u.id) != except)
    }
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: ValidUser) -> UserResult<User> {
        let mut store = self.store.write().await;

        if store.email_taken(user.email(), None) {
            return Err(UserError::EmailConflict(user.email().to_string()));
        }

        let id = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| UserError::Unhandled("user id space exhausted".to_string()))?;
        store.last_id = id;

        let now = Utc::now();
        let created = User {
            id,
            name: user.name().to_string(),
            email: user.email().to_string(),
            phone: user.phone().to_string(),
            created_at: now,
            updated_at: now,
        };
        store.users.insert(id, created.clone());

        tracing::info!(user_id = %id, "Created user");
        Ok(created)
    }

    async fn find_by_id(&self, id: UserId) -> UserResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.get(&id).cloned())
    }

    async fn find_all(&self) -> UserResult<Vec<User>> {
        let store = self.store.read().await;
        Ok(store.users.values().cloned().collect())
    }

    async fn update(&self, id: UserId, user: ValidUser) -> UserResult<Option<User>> {
        let mut store = self.store.write().await;

        if !store.users.contains_key(&id) {
            return Ok(None);
        }

        if store.email_taken(user.email(), Some(id)) {
            return Err(UserError::EmailConflict(user.email().to_string()));
        }

        let Some(existing) = store.users.get_mut(&id) else {
            return Ok(None);
        };
        existing.name = user.name().to_string();
        existing.email = user.email().to_string();
        existing.phone = user.phone().to_string();
        existing.updated_at = Utc::now();

        tracing::info!(user_id = %id, "Updated user");
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: UserId) -> UserResult<bool> {
        let mut store = self.store.write().await;

        if store.users.remove(&id).is_some() {
            tracing::info!(user_id = %id, "Deleted user");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn count(&self) -> UserResult<u64> {
        let store = self.store.read().await;
        Ok(store.users.len() as u64)
    }
}
