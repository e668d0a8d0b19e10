use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed")]
    HashFailed,

    #[error("Password verification failed")]
    VerifyFailed,

    #[error("Hashing task failed to complete")]
    TaskFailed,
}

/// One-way, salted credential hashing. Implementations are expected to run
/// the expensive work off the async runtime.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// Ok(false) means the password simply does not match; Err means the
    /// stored hash could not be parsed or the work itself failed.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
