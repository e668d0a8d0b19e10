pub mod grant_admin;
pub mod revoke_admin;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::auth::application::domain::entities::User;
    use crate::auth::application::ports::outgoing::user_repository::{
        NewUser, UserRepository, UserRepositoryError,
    };

    /// Clones share state; `set_admin` mutates the stored users.
    #[derive(Clone, Default)]
    pub struct InMemoryUserRepo {
        users: Arc<Mutex<Vec<User>>>,
    }

    impl InMemoryUserRepo {
        pub fn with_user(username: &str, is_admin: bool) -> (Self, Uuid) {
            let user = User {
                id: Uuid::new_v4(),
                username: username.to_string(),
                password_hash: "hash".to_string(),
                avatar_url: None,
                is_admin,
                created_at: Utc::now(),
            };
            let id = user.id;

            let repo = Self::default();
            repo.users.lock().unwrap().push(user);
            (repo, id)
        }

        pub fn is_admin(&self, user_id: Uuid) -> Option<bool> {
            self.users
                .lock()
                .unwrap()
                .iter()
                .find(|user| user.id == user_id)
                .map(|user| user.is_admin)
        }
    }

    #[async_trait]
    impl UserRepository for InMemoryUserRepo {
        async fn insert_user(&self, data: NewUser) -> Result<User, UserRepositoryError> {
            let user = User {
                id: Uuid::new_v4(),
                username: data.username,
                password_hash: data.password_hash,
                avatar_url: None,
                is_admin: false,
                created_at: Utc::now(),
            };

            self.users.lock().unwrap().push(user.clone());
            Ok(user)
        }

        async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserRepositoryError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|user| user.id == user_id)
                .cloned())
        }

        async fn find_by_username(
            &self,
            username: &str,
        ) -> Result<Option<User>, UserRepositoryError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|user| user.username == username)
                .cloned())
        }

        async fn set_admin(
            &self,
            user_id: Uuid,
            is_admin: bool,
        ) -> Result<User, UserRepositoryError> {
            let mut users = self.users.lock().unwrap();
            let user = users
                .iter_mut()
                .find(|user| user.id == user_id)
                .ok_or(UserRepositoryError::NotFound)?;

            user.is_admin = is_admin;
            Ok(user.clone())
        }

        async fn set_avatar_url(
            &self,
            user_id: Uuid,
            avatar_url: String,
        ) -> Result<User, UserRepositoryError> {
            let mut users = self.users.lock().unwrap();
            let user = users
                .iter_mut()
                .find(|user| user.id == user_id)
                .ok_or(UserRepositoryError::NotFound)?;

            user.avatar_url = Some(avatar_url);
            Ok(user.clone())
        }
    }
}
