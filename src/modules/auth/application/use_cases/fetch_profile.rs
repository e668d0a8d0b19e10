use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::user_repository::UserRepository;

#[derive(Debug, Clone)]
pub enum FetchProfileError {
    NotFound,
    RepositoryError(String),
}

impl std::fmt::Display for FetchProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchProfileError::NotFound => write!(f, "User not found"),
            FetchProfileError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for FetchProfileError {}

#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub avatar_url: Option<String>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait IFetchProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<UserProfile, FetchProfileError>;
}

pub struct FetchProfileUseCase<R>
where
    R: UserRepository,
{
    users: R,
}

impl<R> FetchProfileUseCase<R>
where
    R: UserRepository,
{
    pub fn new(users: R) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<R> IFetchProfileUseCase for FetchProfileUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<UserProfile, FetchProfileError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(|e| FetchProfileError::RepositoryError(e.to_string()))?
            .ok_or(FetchProfileError::NotFound)?;

        Ok(UserProfile {
            id: user.id,
            username: user.username,
            avatar_url: user.avatar_url,
            is_admin: user.is_admin,
            created_at: user.created_at,
        })
    }
}
