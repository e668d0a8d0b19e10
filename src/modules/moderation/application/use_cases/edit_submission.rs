use async_trait::async_trait;
use uuid::Uuid;

use crate::moderation::application::domain::entities::ReviewEvent;
use crate::moderation::application::ports::outgoing::review_repository::{
    ReviewRepository, ReviewRepositoryError, SubmissionFields,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum EditSubmissionError {
    #[error("Submission not found")]
    NotFound,

    #[error("No permission to edit this submission")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Submitter-only edit while the row is still in the queue. All fields are
/// required; this is a full replacement, not a patch.
#[async_trait]
pub trait IEditSubmissionUseCase: Send + Sync {
    async fn execute(
        &self,
        submission_id: Uuid,
        actor_id: Uuid,
        fields: SubmissionFields,
    ) -> Result<ReviewEvent, EditSubmissionError>;
}

pub struct EditSubmissionUseCase<R>
where
    R: ReviewRepository,
{
    reviews: R,
}

impl<R> EditSubmissionUseCase<R>
where
    R: ReviewRepository,
{
    pub fn new(reviews: R) -> Self {
        Self { reviews }
    }
}

#[async_trait]
impl<R> IEditSubmissionUseCase for EditSubmissionUseCase<R>
where
    R: ReviewRepository + Send + Sync,
{
    async fn execute(
        &self,
        submission_id: Uuid,
        actor_id: Uuid,
        fields: SubmissionFields,
    ) -> Result<ReviewEvent, EditSubmissionError> {
        let submission = self
            .reviews
            .find_submission(submission_id)
            .await
            .map_err(|e| EditSubmissionError::RepositoryError(e.to_string()))?
            .ok_or(EditSubmissionError::NotFound)?;

        if submission.creator_id != actor_id {
            return Err(EditSubmissionError::Forbidden);
        }

        self.reviews
            .replace_submission(submission_id, fields)
            .await
            .map_err(|e| match e {
                ReviewRepositoryError::NotFound => EditSubmissionError::NotFound,
                other => EditSubmissionError::RepositoryError(other.to_string()),
            })
    }
}
