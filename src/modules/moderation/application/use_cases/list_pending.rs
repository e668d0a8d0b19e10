use async_trait::async_trait;

use crate::moderation::application::domain::entities::ReviewEvent;
use crate::moderation::application::ports::outgoing::review_repository::ReviewRepository;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListPendingError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Admin-only (gated at the route); everything still Submitted.
#[async_trait]
pub trait IListPendingUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ReviewEvent>, ListPendingError>;
}

pub struct ListPendingUseCase<R>
where
    R: ReviewRepository,
{
    reviews: R,
}

impl<R> ListPendingUseCase<R>
where
    R: ReviewRepository,
{
    pub fn new(reviews: R) -> Self {
        Self { reviews }
    }
}

#[async_trait]
impl<R> IListPendingUseCase for ListPendingUseCase<R>
where
    R: ReviewRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ReviewEvent>, ListPendingError> {
        self.reviews
            .list_pending()
            .await
            .map_err(|e| ListPendingError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    use crate::moderation::application::use_cases::test_support::InMemoryReviewRepo;

    #[tokio::test]
    async fn lists_everything_submitted() {
        let (repo, id) = InMemoryReviewRepo::with_submission(Uuid::new_v4());
        let use_case = ListPendingUseCase::new(repo);

        let pending = use_case.execute().await.unwrap();

        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, id);
    }
}
