use std::sync::Arc;

use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveCurrentUserError {
    /// Token subject no longer matches an existing account.
    #[error("Unknown user")]
    UnknownUser,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveAdminError {
    #[error("Unknown user")]
    UnknownUser,

    #[error("Administrator privileges required")]
    NotAdmin,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Turns a verified token subject into the acting [`User`]. Every protected
/// handler goes through `resolve`; admin-only handlers go through
/// `resolve_admin`, which rejects non-admin accounts.
#[derive(Clone)]
pub struct CurrentUserResolver {
    users: Arc<dyn UserRepository + Send + Sync>,
}

impl CurrentUserResolver {
    pub fn new(users: Arc<dyn UserRepository + Send + Sync>) -> Self {
        Self { users }
    }

    pub async fn resolve(&self, user_id: Uuid) -> Result<User, ResolveCurrentUserError> {
        match self.users.find_by_id(user_id).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(ResolveCurrentUserError::UnknownUser),
            Err(UserRepositoryError::DatabaseError(msg)) => {
                Err(ResolveCurrentUserError::RepositoryError(msg))
            }
            Err(other) => Err(ResolveCurrentUserError::RepositoryError(other.to_string())),
        }
    }

    pub async fn resolve_admin(&self, user_id: Uuid) -> Result<User, ResolveAdminError> {
        let user = self.resolve(user_id).await.map_err(|e| match e {
            ResolveCurrentUserError::UnknownUser => ResolveAdminError::UnknownUser,
            ResolveCurrentUserError::RepositoryError(msg) => {
                ResolveAdminError::RepositoryError(msg)
            }
        })?;

        if !user.is_admin {
            return Err(ResolveAdminError::NotAdmin);
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;

    use crate::auth::application::ports::outgoing::user_repository::NewUser;

    #[derive(Clone)]
    struct MockUserRepo {
        result: Result<Option<User>, UserRepositoryError>,
    }

    #[async_trait]
    impl UserRepository for MockUserRepo {
        async fn insert_user(&self, _data: NewUser) -> Result<User, UserRepositoryError> {
            unimplemented!("not used in resolver tests")
        }

        async fn find_by_id(&self, _user_id: Uuid) -> Result<Option<User>, UserRepositoryError> {
            self.result.clone()
        }

        async fn find_by_username(
            &self,
            _username: &str,
        ) -> Result<Option<User>, UserRepositoryError> {
            unimplemented!("not used in resolver tests")
        }

        async fn set_admin(
            &self,
            _user_id: Uuid,
            _is_admin: bool,
        ) -> Result<User, UserRepositoryError> {
            unimplemented!("not used in resolver tests")
        }

        async fn set_avatar_url(
            &self,
            _user_id: Uuid,
            _avatar_url: String,
        ) -> Result<User, UserRepositoryError> {
            unimplemented!("not used in resolver tests")
        }
    }

    fn sample_user(id: Uuid, is_admin: bool) -> User {
        User {
            id,
            username: "testuser".to_string(),
            password_hash: "hashed".to_string(),
            avatar_url: None,
            is_admin,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn resolves_existing_user() {
        let user_id = Uuid::new_v4();
        let resolver = CurrentUserResolver::new(Arc::new(MockUserRepo {
            result: Ok(Some(sample_user(user_id, false))),
        }));

        let resolved = resolver.resolve(user_id).await.unwrap();
        assert_eq!(resolved.id, user_id);
    }

    #[tokio::test]
    async fn unknown_subject_is_rejected() {
        let resolver = CurrentUserResolver::new(Arc::new(MockUserRepo { result: Ok(None) }));

        let result = resolver.resolve(Uuid::new_v4()).await;
        assert!(matches!(result, Err(ResolveCurrentUserError::UnknownUser)));
    }

    #[tokio::test]
    async fn resolve_admin_passes_admin_through() {
        let user_id = Uuid::new_v4();
        let resolver = CurrentUserResolver::new(Arc::new(MockUserRepo {
            result: Ok(Some(sample_user(user_id, true))),
        }));

        let resolved = resolver.resolve_admin(user_id).await.unwrap();
        assert!(resolved.is_admin);
    }

    #[tokio::test]
    async fn resolve_admin_rejects_regular_user() {
        let user_id = Uuid::new_v4();
        let resolver = CurrentUserResolver::new(Arc::new(MockUserRepo {
            result: Ok(Some(sample_user(user_id, false))),
        }));

        let result = resolver.resolve_admin(user_id).await;
        assert!(matches!(result, Err(ResolveAdminError::NotAdmin)));
    }

    #[tokio::test]
    async fn database_errors_surface_as_repository_errors() {
        let resolver = CurrentUserResolver::new(Arc::new(MockUserRepo {
            result: Err(UserRepositoryError::DatabaseError("db down".to_string())),
        }));

        match resolver.resolve(Uuid::new_v4()).await {
            Err(ResolveCurrentUserError::RepositoryError(msg)) => {
                assert!(msg.contains("db down"))
            }
            other => panic!("Expected RepositoryError, got {:?}", other),
        }
    }
}
