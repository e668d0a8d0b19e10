use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::upload::application::domain::policies::upload_policy::image_extension;
use crate::upload::application::ports::outgoing::file_store::FileStore;

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreEventImageError {
    #[error("File type is not allowed")]
    InvalidExtension,

    #[error("Storage error: {0}")]
    StorageError(String),
}

/// Stores an event picture; the returned URL is attached to a submission or
/// event by the client in a later call.
#[async_trait]
pub trait IStoreEventImageUseCase: Send + Sync {
    async fn execute(
        &self,
        original_filename: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StoreEventImageError>;
}

pub struct StoreEventImageUseCase {
    files: Arc<dyn FileStore + Send + Sync>,
}

impl StoreEventImageUseCase {
    pub fn new(files: Arc<dyn FileStore + Send + Sync>) -> Self {
        Self { files }
    }
}

#[async_trait]
impl IStoreEventImageUseCase for StoreEventImageUseCase {
    async fn execute(
        &self,
        original_filename: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StoreEventImageError> {
        let ext =
            image_extension(original_filename).ok_or(StoreEventImageError::InvalidExtension)?;

        let filename = format!("{}.{}", Uuid::new_v4(), ext);

        self.files
            .store("events", &filename, bytes)
            .await
            .map_err(|e| StoreEventImageError::StorageError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::upload::application::use_cases::test_support::RecordingFileStore;

    #[tokio::test]
    async fn event_image_goes_under_the_events_directory() {
        let files = RecordingFileStore::default();
        let use_case = StoreEventImageUseCase::new(Arc::new(files.clone()));

        let url = use_case.execute("poster.webp", vec![0; 128]).await.unwrap();

        assert!(url.starts_with("/media/events/"));
        assert_eq!(files.stored.lock().unwrap()[0].2, 128);
    }

    #[tokio::test]
    async fn disallowed_extension_is_rejected() {
        let use_case =
            StoreEventImageUseCase::new(Arc::new(RecordingFileStore::default()));

        let result = use_case.execute("poster.pdf", vec![1]).await;

        assert!(matches!(result, Err(StoreEventImageError::InvalidExtension)));
    }
}
