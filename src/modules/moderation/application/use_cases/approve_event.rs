use async_trait::async_trait;
use uuid::Uuid;

use crate::event::application::domain::entities::Event;
use crate::moderation::application::ports::outgoing::review_repository::{
    ReviewRepository, ReviewRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApproveEventError {
    #[error("Submission not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Terminal transition Submitted to Published. The copy-and-delete runs as
/// one transaction in the repository; this layer only maps the outcome.
#[async_trait]
pub trait IApproveEventUseCase: Send + Sync {
    async fn execute(&self, submission_id: Uuid) -> Result<Event, ApproveEventError>;
}

pub struct ApproveEventUseCase<R>
where
    R: ReviewRepository,
{
    reviews: R,
}

impl<R> ApproveEventUseCase<R>
where
    R: ReviewRepository,
{
    pub fn new(reviews: R) -> Self {
        Self { reviews }
    }
}

#[async_trait]
impl<R> IApproveEventUseCase for ApproveEventUseCase<R>
where
    R: ReviewRepository + Send + Sync,
{
    async fn execute(&self, submission_id: Uuid) -> Result<Event, ApproveEventError> {
        self.reviews
            .publish_submission(submission_id)
            .await
            .map_err(|e| match e {
                ReviewRepositoryError::NotFound => ApproveEventError::NotFound,
                other => ApproveEventError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::moderation::application::use_cases::test_support::InMemoryReviewRepo;

    #[tokio::test]
    async fn approve_moves_the_submission_into_the_directory() {
        let creator = Uuid::new_v4();
        let (repo, id) = InMemoryReviewRepo::with_submission(creator);
        let use_case = ApproveEventUseCase::new(repo.clone());

        let event = use_case.execute(id).await.unwrap();

        // Exactly one of {queue, directory} holds the submission - never both.
        assert_eq!(repo.queue_len(), 0);
        assert_eq!(repo.directory_len(), 1);
        assert!(event.is_approved);
        assert_eq!(event.creator_id, creator);
        assert!(event.images.is_empty());
    }

    #[tokio::test]
    async fn approve_twice_fails_the_second_time() {
        let (repo, id) = InMemoryReviewRepo::with_submission(Uuid::new_v4());
        let use_case = ApproveEventUseCase::new(repo.clone());

        use_case.execute(id).await.unwrap();
        let second = use_case.execute(id).await;

        assert!(matches!(second, Err(ApproveEventError::NotFound)));
        assert_eq!(repo.directory_len(), 1);
    }

    #[tokio::test]
    async fn approving_an_unknown_submission_fails_not_found() {
        let use_case = ApproveEventUseCase::new(InMemoryReviewRepo::default());

        let result = use_case.execute(Uuid::new_v4()).await;

        assert!(matches!(result, Err(ApproveEventError::NotFound)));
    }
}
