use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::comment::application::domain::entities::Comment;
use crate::comment::application::ports::outgoing::comment_repository::{
    CommentRepository, NewComment,
};
use crate::event::application::ports::outgoing::event_repository::EventRepository;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCommentError {
    #[error("Event not found")]
    EventNotFound,

    #[error("Comment text cannot be empty")]
    EmptyText,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        event_id: Uuid,
        text: String,
        actor_id: Uuid,
    ) -> Result<Comment, CreateCommentError>;
}

pub struct CreateCommentUseCase<R>
where
    R: CommentRepository,
{
    comments: R,
    events: Arc<dyn EventRepository + Send + Sync>,
}

impl<R> CreateCommentUseCase<R>
where
    R: CommentRepository,
{
    pub fn new(comments: R, events: Arc<dyn EventRepository + Send + Sync>) -> Self {
        Self { comments, events }
    }
}

#[async_trait]
impl<R> ICreateCommentUseCase for CreateCommentUseCase<R>
where
    R: CommentRepository + Send + Sync,
{
    async fn execute(
        &self,
        event_id: Uuid,
        text: String,
        actor_id: Uuid,
    ) -> Result<Comment, CreateCommentError> {
        let text = text.trim().to_string();
        if text.is_empty() {
            return Err(CreateCommentError::EmptyText);
        }

        self.events
            .find_event(event_id)
            .await
            .map_err(|e| CreateCommentError::RepositoryError(e.to_string()))?
            .ok_or(CreateCommentError::EventNotFound)?;

        self.comments
            .insert_comment(NewComment {
                text,
                user_id: actor_id,
                event_id,
            })
            .await
            .map_err(|e| CreateCommentError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::comment::application::use_cases::test_support::InMemoryCommentRepo;
    use crate::event::application::use_cases::test_support::{sample_event, MockEventRepo};

    #[tokio::test]
    async fn comment_lands_on_an_existing_event() {
        let event = sample_event(Uuid::new_v4());
        let author = Uuid::new_v4();
        let repo = InMemoryCommentRepo::default();
        let use_case = CreateCommentUseCase::new(
            repo.clone(),
            Arc::new(MockEventRepo {
                find_result: Ok(Some(event.clone())),
                ..Default::default()
            }),
        );

        let comment = use_case
            .execute(event.id, "See you there".to_string(), author)
            .await
            .unwrap();

        assert_eq!(comment.user_id, author);
        assert_eq!(comment.event_id, event.id);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn commenting_on_a_missing_event_fails() {
        let use_case = CreateCommentUseCase::new(
            InMemoryCommentRepo::default(),
            Arc::new(MockEventRepo::default()),
        );

        let result = use_case
            .execute(Uuid::new_v4(), "hello".to_string(), Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(CreateCommentError::EventNotFound)));
    }

    #[tokio::test]
    async fn whitespace_only_text_is_rejected() {
        let use_case = CreateCommentUseCase::new(
            InMemoryCommentRepo::default(),
            Arc::new(MockEventRepo::default()),
        );

        let result = use_case
            .execute(Uuid::new_v4(), "   ".to_string(), Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(CreateCommentError::EmptyText)));
    }
}
