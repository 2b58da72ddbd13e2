use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder, SqlErr,
};

use crate::{
    entity,
    error::{UserError, UserResult},
    models::{User, UserId},
    repository::UserRepository,
    validation::ValidUser,
};

/// Postgres-backed repository.
///
/// Email uniqueness comes from the `users.email` UNIQUE index; violations
/// surface as [`UserError::EmailConflict`].
#[derive(Clone)]
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Unique violations can only come from the email index; everything else is unexpected
fn map_db_err(err: DbErr, email: &str) -> UserError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => UserError::EmailConflict(email.to_string()),
        _ => internal(err),
    }
}

fn internal(err: DbErr) -> UserError {
    UserError::Unhandled(format!("Database error: {}", err))
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: ValidUser) -> UserResult<User> {
        let now = Utc::now();
        let active_model = entity::ActiveModel {
            name: Set(user.name().to_string()),
            email: Set(user.email().to_string()),
            phone: Set(user.phone().to_string()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| map_db_err(e, user.email()))?;

        tracing::info!(user_id = %model.id, "Created user");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: UserId) -> UserResult<Option<User>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(internal)?;

        Ok(model.map(|m| m.into()))
    }

    async fn find_all(&self) -> UserResult<Vec<User>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(internal)?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, id: UserId, user: ValidUser) -> UserResult<Option<User>> {
        let active_model = entity::ActiveModel {
            id: Unchanged(id),
            name: Set(user.name().to_string()),
            email: Set(user.email().to_string()),
            phone: Set(user.phone().to_string()),
            updated_at: Set(Utc::now().into()),
            ..Default::default()
        };

        match active_model.update(&self.db).await {
            Ok(model) => {
                tracing::info!(user_id = %id, "Updated user");
                Ok(Some(model.into()))
            }
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(map_db_err(e, user.email())),
        }
    }

    async fn delete(&self, id: UserId) -> UserResult<bool> {
        let result = entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(internal)?;

        let deleted = result.rows_affected > 0;
        if deleted {
            tracing::info!(user_id = %id, "Deleted user");
        }
        Ok(deleted)
    }

    async fn count(&self) -> UserResult<u64> {
        entity::Entity::find().count(&self.db).await.map_err(internal)
    }
}
