use std::path::PathBuf;

use async_trait::async_trait;

use crate::upload::application::ports::outgoing::file_store::{FileStore, FileStoreError};

/// Filesystem blob store. Files land under `<media_root>/<directory>/` and
/// are served back under `<public_prefix>/<directory>/`.
#[derive(Clone)]
pub struct LocalDiskStore {
    media_root: PathBuf,
    public_prefix: String,
}

impl LocalDiskStore {
    pub fn new(media_root: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            media_root: media_root.into(),
            public_prefix: public_prefix.into(),
        }
    }

    pub fn from_env() -> Self {
        let media_root =
            std::env::var("MEDIA_ROOT").unwrap_or_else(|_| "media".to_string());
        let public_prefix =
            std::env::var("MEDIA_PUBLIC_PREFIX").unwrap_or_else(|_| "/media".to_string());

        Self::new(media_root, public_prefix)
    }

    pub fn media_root(&self) -> &PathBuf {
        &self.media_root
    }
}

#[async_trait]
impl FileStore for LocalDiskStore {
    async fn store(
        &self,
        directory: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<String, FileStoreError> {
        let dir = self.media_root.join(directory);

        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| FileStoreError::Io(e.to_string()))?;

        let path = dir.join(filename);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| FileStoreError::Io(e.to_string()))?;

        Ok(format!("{}/{}/{}", self.public_prefix, directory, filename))
    }
}
