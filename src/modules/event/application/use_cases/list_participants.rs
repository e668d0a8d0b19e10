use async_trait::async_trait;
use uuid::Uuid;

use crate::event::application::domain::entities::UserSummary;
use crate::event::application::ports::outgoing::event_repository::{
    EventRepository, EventRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListParticipantsError {
    #[error("Event not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IListParticipantsUseCase: Send + Sync {
    async fn execute(&self, event_id: Uuid) -> Result<Vec<UserSummary>, ListParticipantsError>;
}

pub struct ListParticipantsUseCase<R>
where
    R: EventRepository,
{
    events: R,
}

impl<R> ListParticipantsUseCase<R>
where
    R: EventRepository,
{
    pub fn new(events: R) -> Self {
        Self { events }
    }
}

#[async_trait]
impl<R> IListParticipantsUseCase for ListParticipantsUseCase<R>
where
    R: EventRepository + Send + Sync,
{
    async fn execute(&self, event_id: Uuid) -> Result<Vec<UserSummary>, ListParticipantsError> {
        self.events
            .find_event(event_id)
            .await
            .map_err(|e| ListParticipantsError::RepositoryError(e.to_string()))?
            .ok_or(ListParticipantsError::NotFound)?;

        self.events
            .list_participants(event_id)
            .await
            .map_err(|e| match e {
                EventRepositoryError::NotFound => ListParticipantsError::NotFound,
                other => ListParticipantsError::RepositoryError(other.to_string()),
            })
    }
}
