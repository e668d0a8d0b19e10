use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    /// Unique index on username violated at INSERT time.
    #[error("Username already registered")]
    UsernameTaken,

    #[error("User not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert_user(&self, data: NewUser) -> Result<User, UserRepositoryError>;

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserRepositoryError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserRepositoryError>;

    /// Flips the administrator flag; fails NotFound for an absent target.
    async fn set_admin(&self, user_id: Uuid, is_admin: bool) -> Result<User, UserRepositoryError>;

    async fn set_avatar_url(
        &self,
        user_id: Uuid,
        avatar_url: String,
    ) -> Result<User, UserRepositoryError>;
}
