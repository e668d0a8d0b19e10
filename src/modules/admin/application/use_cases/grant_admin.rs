use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GrantAdminError {
    #[error("User not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Sets the target's administrator flag. Idempotent: granting to an admin
/// leaves them an admin.
#[async_trait]
pub trait IGrantAdminUseCase: Send + Sync {
    async fn execute(&self, target_user_id: Uuid) -> Result<User, GrantAdminError>;
}

pub struct GrantAdminUseCase<R>
where
    R: UserRepository,
{
    users: R,
}

impl<R> GrantAdminUseCase<R>
where
    R: UserRepository,
{
    pub fn new(users: R) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<R> IGrantAdminUseCase for GrantAdminUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, target_user_id: Uuid) -> Result<User, GrantAdminError> {
        self.users
            .set_admin(target_user_id, true)
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => GrantAdminError::NotFound,
                other => GrantAdminError::RepositoryError(other.to_string()),
            })
    }
}
