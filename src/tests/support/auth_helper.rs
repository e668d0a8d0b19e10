use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

/// A user plus a real, verifiable token for them, backed by a throwaway
/// test secret. Wire `token_provider` into the app and put `token` in the
/// Authorization header.
pub struct TestIdentity {
    pub user: User,
    pub token: String,
    pub token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl TestIdentity {
    pub fn user() -> Self {
        Self::build("testuser", false)
    }

    pub fn admin() -> Self {
        Self::build("testadmin", true)
    }

    fn build(username: &str, is_admin: bool) -> Self {
        let service = JwtTokenService::new(JwtConfig {
            secret_key: "TEST_ONLY_SECRET_KEY_32_CHARS_MIN!".to_string(),
            issuer: "test_issuer".to_string(),
            access_token_expiry: 3600,
        });

        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: "irrelevant".to_string(),
            avatar_url: None,
            is_admin,
            created_at: Utc::now(),
        };

        let token = service
            .generate_access_token(user.id)
            .expect("test token generation cannot fail");

        Self {
            user,
            token,
            token_provider: Arc::new(service),
        }
    }
}
