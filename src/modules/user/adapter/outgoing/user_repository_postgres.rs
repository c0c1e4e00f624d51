use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    Set,
};
use std::sync::Arc;
use tracing::debug;

use crate::modules::user::application::domain::entities::{NewUser, User, UserId};
use crate::modules::user::application::ports::outgoing::{
    Creatable, Deletable, Readable, RepositoryError, Updatable,
};
use crate::shared::repository::Record;

// SeaORM entity
use super::sea_orm_entity::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};

#[derive(Debug, Clone)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Creatable<User> for UserRepositoryPostgres {
    async fn create(&self, draft: NewUser) -> Result<User, RepositoryError> {
        let now = Utc::now().fixed_offset();

        let active = UserActiveModel {
            id: NotSet,
            username: Set(draft.username),
            email: Set(draft.email),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.into())
    }
}

#[async_trait]
impl Readable<User> for UserRepositoryPostgres {
    async fn get_by_id(&self, id: UserId) -> Result<User, RepositoryError> {
        UserEntity::find_by_id(id.value())
            .filter(UserColumn::DeletedAt.is_null())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(User::from)
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl Updatable<User> for UserRepositoryPostgres {
    async fn update(&self, id: UserId, draft: NewUser) -> Result<User, RepositoryError> {
        // id, created_at and deleted_at are never written here
        let changes = UserActiveModel {
            username: Set(draft.username),
            email: Set(draft.email),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let rows = UserEntity::update_many()
            .set(changes)
            .filter(UserColumn::Id.eq(id.value()))
            .filter(UserColumn::DeletedAt.is_null())
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter()
            .next()
            .map(User::from)
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl Deletable<User> for UserRepositoryPostgres {
    async fn delete(&self, record: &User) -> Result<(), RepositoryError> {
        let user_id = record.id();
        let changes = UserActiveModel {
            deleted_at: Set(Some(Utc::now().fixed_offset())),
            ..Default::default()
        };

        let result = UserEntity::update_many()
            .set(changes)
            .filter(UserColumn::Id.eq(user_id.value()))
            .filter(UserColumn::DeletedAt.is_null())
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            debug!(user_id = %user_id, "User already deleted");
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> RepositoryError {
    RepositoryError::DatabaseError(e.to_string())
}
