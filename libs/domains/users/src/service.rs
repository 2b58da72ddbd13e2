use std::sync::Arc;
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::models::{User, UserId, UserPayload};
use crate::repository::UserRepository;

/// Service layer for User business logic
///
/// Path ids arrive as raw strings; one that does not parse names no record and
/// is reported as not found.
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// All users ordered by id
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, id: &str) -> UserResult<User> {
        let user_id = parse_id(id)?;
        self.repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    /// Presence, then format rules, then the write
    #[instrument(skip(self, input))]
    pub async fn create_user(&self, input: UserPayload) -> UserResult<User> {
        let valid = input.require_all_fields()?.validate_fields()?;
        self.repository.create(valid).await
    }

    /// Full replacement. Presence is checked before the id is looked up.
    #[instrument(skip(self, input))]
    pub async fn replace_user(&self, id: &str, input: UserPayload) -> UserResult<User> {
        let draft = input.require_all_fields()?;
        let user_id = parse_id(id)?;

        if self.repository.find_by_id(user_id).await?.is_none() {
            return Err(UserError::NotFound(id.to_string()));
        }

        let valid = draft.validate_fields()?;
        self.repository
            .update(user_id, valid)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    /// Partial update. Omitted fields keep their stored value.
    #[instrument(skip(self, input))]
    pub async fn patch_user(&self, id: &str, input: UserPayload) -> UserResult<User> {
        let user_id = parse_id(id)?;
        self.repository
            .patch(user_id, input)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: &str) -> UserResult<()> {
        let user_id = parse_id(id)?;
        let deleted = self.repository.delete(user_id).await?;

        if !deleted {
            return Err(UserError::NotFound(id.to_string()));
        }

        Ok(())
    }
}

fn parse_id(raw: &str) -> UserResult<UserId> {
    raw.parse::<UserId>()
        .map_err(|_| UserError::NotFound(raw.to_string()))
}
