use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};
use crate::upload::application::domain::policies::upload_policy::image_extension;
use crate::upload::application::ports::outgoing::file_store::FileStore;

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreAvatarError {
    #[error("File type is not allowed")]
    InvalidExtension,

    #[error("User not found")]
    UserNotFound,

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Stores the picture under a fresh UUID name and points the user's
/// avatar_url at it.
#[async_trait]
pub trait IStoreAvatarUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        original_filename: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StoreAvatarError>;
}

pub struct StoreAvatarUseCase<R>
where
    R: UserRepository,
{
    users: R,
    files: Arc<dyn FileStore + Send + Sync>,
}

impl<R> StoreAvatarUseCase<R>
where
    R: UserRepository,
{
    pub fn new(users: R, files: Arc<dyn FileStore + Send + Sync>) -> Self {
        Self { users, files }
    }
}

#[async_trait]
impl<R> IStoreAvatarUseCase for StoreAvatarUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        original_filename: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StoreAvatarError> {
        let ext =
            image_extension(original_filename).ok_or(StoreAvatarError::InvalidExtension)?;

        let filename = format!("{}.{}", Uuid::new_v4(), ext);

        let url = self
            .files
            .store("avatars", &filename, bytes)
            .await
            .map_err(|e| StoreAvatarError::StorageError(e.to_string()))?;

        self.users
            .set_avatar_url(user_id, url.clone())
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => StoreAvatarError::UserNotFound,
                other => StoreAvatarError::RepositoryError(other.to_string()),
            })?;

        Ok(url)
    }
}
