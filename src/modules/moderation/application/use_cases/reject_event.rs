use async_trait::async_trait;
use uuid::Uuid;

use crate::moderation::application::ports::outgoing::review_repository::{
    ReviewRepository, ReviewRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum RejectEventError {
    #[error("Submission not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Terminal transition Submitted to Rejected: the review row disappears and
/// nothing reaches the directory.
#[async_trait]
pub trait IRejectEventUseCase: Send + Sync {
    async fn execute(&self, submission_id: Uuid) -> Result<(), RejectEventError>;
}

pub struct RejectEventUseCase<R>
where
    R: ReviewRepository,
{
    reviews: R,
}

impl<R> RejectEventUseCase<R>
where
    R: ReviewRepository,
{
    pub fn new(reviews: R) -> Self {
        Self { reviews }
    }
}

#[async_trait]
impl<R> IRejectEventUseCase for RejectEventUseCase<R>
where
    R: ReviewRepository + Send + Sync,
{
    async fn execute(&self, submission_id: Uuid) -> Result<(), RejectEventError> {
        self.reviews
            .delete_submission(submission_id)
            .await
            .map_err(|e| match e {
                ReviewRepositoryError::NotFound => RejectEventError::NotFound,
                other => RejectEventError::RepositoryError(other.to_string()),
            })
    }
}
