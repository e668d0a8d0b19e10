use std::sync::Arc;
use std::sync::OnceLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::auth::application::ports::outgoing::user_repository::{
    NewUser, UserRepository, UserRepositoryError,
};

// ========================= Register Request =========================

/// Validated registration request - fields are private and guaranteed valid
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    username: String,
    password: String,
}

#[derive(Debug, Clone)]
pub enum RegisterRequestError {
    EmptyUsername,
    InvalidUsername,
    EmptyPassword,
}

impl std::fmt::Display for RegisterRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterRequestError::EmptyUsername => write!(f, "Username cannot be empty"),
            RegisterRequestError::InvalidUsername => write!(
                f,
                "Username must be 3-32 characters of letters, digits or underscores"
            ),
            RegisterRequestError::EmptyPassword => write!(f, "Password cannot be empty"),
        }
    }
}

impl std::error::Error for RegisterRequestError {}

fn username_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9_]{3,32}$").expect("Invalid username pattern"))
}

impl RegisterRequest {
    pub fn new(username: String, password: String) -> Result<Self, RegisterRequestError> {
        let username = username.trim().to_string();

        if username.is_empty() {
            return Err(RegisterRequestError::EmptyUsername);
        }

        if !username_pattern().is_match(&username) {
            return Err(RegisterRequestError::InvalidUsername);
        }

        if password.trim().is_empty() {
            return Err(RegisterRequestError::EmptyPassword);
        }

        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ========================= Register Error =========================

#[derive(Debug, Clone)]
pub enum RegisterError {
    UsernameTaken,
    HashingFailed(String),
    RepositoryError(String),
}

impl std::fmt::Display for RegisterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterError::UsernameTaken => write!(f, "Username already registered"),
            RegisterError::HashingFailed(msg) => write!(f, "Password hashing failed: {}", msg),
            RegisterError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for RegisterError {}

// ========================= Register Response =========================

#[derive(Debug, Clone, Serialize)]
pub struct RegisteredUser {
    pub id: Uuid,
    pub username: String,
    pub avatar_url: Option<String>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

// ========================= Use Case =========================

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, request: RegisterRequest) -> Result<RegisteredUser, RegisterError>;
}

pub struct RegisterUserUseCase<R>
where
    R: UserRepository,
{
    users: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<R> RegisterUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(users: R, password_hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            users,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R> IRegisterUserUseCase for RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, request: RegisterRequest) -> Result<RegisteredUser, RegisterError> {
        let password_hash = self
            .password_hasher
            .hash_password(request.password())
            .await
            .map_err(|e| RegisterError::HashingFailed(e.to_string()))?;

        // The unique index on username is the final arbiter; a pre-check
        // alone would race with concurrent registrations.
        let user = self
            .users
            .insert_user(NewUser {
                username: request.username().to_string(),
                password_hash,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UsernameTaken => RegisterError::UsernameTaken,
                other => RegisterError::RepositoryError(other.to_string()),
            })?;

        Ok(RegisteredUser {
            id: user.id,
            username: user.username,
            avatar_url: user.avatar_url,
            is_admin: user.is_admin,
            created_at: user.created_at,
        })
    }
}
