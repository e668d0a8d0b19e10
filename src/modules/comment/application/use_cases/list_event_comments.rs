use async_trait::async_trait;
use uuid::Uuid;

use crate::comment::application::domain::entities::Comment;
use crate::comment::application::ports::outgoing::comment_repository::CommentRepository;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListEventCommentsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Public; newest first.
#[async_trait]
pub trait IListEventCommentsUseCase: Send + Sync {
    async fn execute(&self, event_id: Uuid) -> Result<Vec<Comment>, ListEventCommentsError>;
}

pub struct ListEventCommentsUseCase<R>
where
    R: CommentRepository,
{
    comments: R,
}

impl<R> ListEventCommentsUseCase<R>
where
    R: CommentRepository,
{
    pub fn new(comments: R) -> Self {
        Self { comments }
    }
}

#[async_trait]
impl<R> IListEventCommentsUseCase for ListEventCommentsUseCase<R>
where
    R: CommentRepository + Send + Sync,
{
    async fn execute(&self, event_id: Uuid) -> Result<Vec<Comment>, ListEventCommentsError> {
        self.comments
            .list_for_event(event_id)
            .await
            .map_err(|e| ListEventCommentsError::RepositoryError(e.to_string()))
    }
}
