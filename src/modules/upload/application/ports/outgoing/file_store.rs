use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FileStoreError {
    #[error("Storage error: {0}")]
    Io(String),
}

/// Blob storage: a named binary under a directory-like key, answered with a
/// retrievable URL path. Name collisions are the caller's problem - names
/// are expected to be globally unique per upload.
#[async_trait]
pub trait FileStore: Send + Sync {
    async fn store(
        &self,
        directory: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<String, FileStoreError>;
}
