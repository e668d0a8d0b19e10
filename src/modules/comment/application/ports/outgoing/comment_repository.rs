use async_trait::async_trait;
use uuid::Uuid;

use crate::comment::application::domain::entities::Comment;

#[derive(Debug, Clone)]
pub struct NewComment {
    pub text: String,
    pub user_id: Uuid,
    pub event_id: Uuid,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentRepositoryError {
    #[error("Comment not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert_comment(&self, data: NewComment) -> Result<Comment, CommentRepositoryError>;

    /// Newest first.
    async fn list_for_event(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<Comment>, CommentRepositoryError>;

    /// The lookup matches id AND author in one filter, so a non-owner's
    /// delete reads as NotFound. Do not split this into find-then-check.
    async fn delete_by_author(
        &self,
        comment_id: Uuid,
        author_id: Uuid,
    ) -> Result<(), CommentRepositoryError>;
}
