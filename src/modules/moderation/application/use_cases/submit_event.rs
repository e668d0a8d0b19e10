use async_trait::async_trait;
use uuid::Uuid;

use crate::moderation::application::domain::entities::ReviewEvent;
use crate::moderation::application::ports::outgoing::review_repository::{
    NewSubmission, ReviewRepository, SubmissionFields,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitEventError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Any authenticated user may submit; the result sits in the queue until an
/// administrator decides.
#[async_trait]
pub trait ISubmitEventUseCase: Send + Sync {
    async fn execute(
        &self,
        fields: SubmissionFields,
        actor_id: Uuid,
    ) -> Result<ReviewEvent, SubmitEventError>;
}

pub struct SubmitEventUseCase<R>
where
    R: ReviewRepository,
{
    reviews: R,
}

impl<R> SubmitEventUseCase<R>
where
    R: ReviewRepository,
{
    pub fn new(reviews: R) -> Self {
        Self { reviews }
    }
}

#[async_trait]
impl<R> ISubmitEventUseCase for SubmitEventUseCase<R>
where
    R: ReviewRepository + Send + Sync,
{
    async fn execute(
        &self,
        fields: SubmissionFields,
        actor_id: Uuid,
    ) -> Result<ReviewEvent, SubmitEventError> {
        self.reviews
            .insert_submission(NewSubmission {
                fields,
                creator_id: actor_id,
            })
            .await
            .map_err(|e| SubmitEventError::RepositoryError(e.to_string()))
    }
}
