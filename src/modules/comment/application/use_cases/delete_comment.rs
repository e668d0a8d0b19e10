use async_trait::async_trait;
use uuid::Uuid;

use crate::comment::application::ports::outgoing::comment_repository::{
    CommentRepository, CommentRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCommentError {
    /// Also covers "exists but belongs to someone else". A non-owner is
    /// told nothing beyond "not found".
    #[error("Comment not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteCommentUseCase: Send + Sync {
    async fn execute(&self, comment_id: Uuid, actor_id: Uuid) -> Result<(), DeleteCommentError>;
}

pub struct DeleteCommentUseCase<R>
where
    R: CommentRepository,
{
    comments: R,
}

impl<R> DeleteCommentUseCase<R>
where
    R: CommentRepository,
{
    pub fn new(comments: R) -> Self {
        Self { comments }
    }
}

#[async_trait]
impl<R> IDeleteCommentUseCase for DeleteCommentUseCase<R>
where
    R: CommentRepository + Send + Sync,
{
    async fn execute(&self, comment_id: Uuid, actor_id: Uuid) -> Result<(), DeleteCommentError> {
        self.comments
            .delete_by_author(comment_id, actor_id)
            .await
            .map_err(|e| match e {
                CommentRepositoryError::NotFound => DeleteCommentError::NotFound,
                other => DeleteCommentError::RepositoryError(other.to_string()),
            })
    }
}
