use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users::{self, ActiveModel, Column, Entity};
use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::user_repository::{
    NewUser, UserRepository, UserRepositoryError,
};

#[derive(Clone)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn insert_user(&self, data: NewUser) -> Result<User, UserRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(data.username.trim().to_string()),
            password_hash: Set(data.password_hash),
            avatar_url: Set(None),
            is_admin: Set(false),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let result = model.insert(&*self.db).await.map_err(map_username_error)?;

        Ok(model_to_user(result))
    }

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserRepositoryError> {
        let found = Entity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(model_to_user))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserRepositoryError> {
        let found = Entity::find()
            .filter(Column::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(model_to_user))
    }

    async fn set_admin(&self, user_id: Uuid, is_admin: bool) -> Result<User, UserRepositoryError> {
        let found = Entity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(UserRepositoryError::NotFound)?;

        let mut model: ActiveModel = found.into();
        model.is_admin = Set(is_admin);

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_user(updated))
    }

    async fn set_avatar_url(
        &self,
        user_id: Uuid,
        avatar_url: String,
    ) -> Result<User, UserRepositoryError> {
        let found = Entity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(UserRepositoryError::NotFound)?;

        let mut model: ActiveModel = found.into();
        model.avatar_url = Set(Some(avatar_url));

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_user(updated))
    }
}

fn model_to_user(model: users::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        password_hash: model.password_hash,
        avatar_url: model.avatar_url,
        is_admin: model.is_admin,
        created_at: model.created_at.into(),
    }
}

fn map_username_error(e: DbErr) -> UserRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("username")
    {
        UserRepositoryError::UsernameTaken
    } else {
        UserRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> UserRepositoryError {
    UserRepositoryError::DatabaseError(e.to_string())
}
