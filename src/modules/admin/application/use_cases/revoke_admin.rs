use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum RevokeAdminError {
    #[error("User not found")]
    NotFound,

    /// An admin cannot strip their own rights - not even the last one.
    #[error("Cannot revoke your own administrator privileges")]
    SelfRevocationDenied,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IRevokeAdminUseCase: Send + Sync {
    async fn execute(
        &self,
        target_user_id: Uuid,
        acting_admin_id: Uuid,
    ) -> Result<User, RevokeAdminError>;
}

pub struct RevokeAdminUseCase<R>
where
    R: UserRepository,
{
    users: R,
}

impl<R> RevokeAdminUseCase<R>
where
    R: UserRepository,
{
    pub fn new(users: R) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<R> IRevokeAdminUseCase for RevokeAdminUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        target_user_id: Uuid,
        acting_admin_id: Uuid,
    ) -> Result<User, RevokeAdminError> {
        if target_user_id == acting_admin_id {
            return Err(RevokeAdminError::SelfRevocationDenied);
        }

        self.users
            .set_admin(target_user_id, false)
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => RevokeAdminError::NotFound,
                other => RevokeAdminError::RepositoryError(other.to_string()),
            })
    }
}
