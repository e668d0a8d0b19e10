use async_trait::async_trait;
use uuid::Uuid;

use crate::event::application::ports::outgoing::event_repository::{
    EventDetails, EventRepository, EventRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetEventError {
    #[error("Event not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IGetEventUseCase: Send + Sync {
    async fn execute(&self, event_id: Uuid, viewer_id: Uuid)
        -> Result<EventDetails, GetEventError>;
}

pub struct GetEventUseCase<R>
where
    R: EventRepository,
{
    events: R,
}

impl<R> GetEventUseCase<R>
where
    R: EventRepository,
{
    pub fn new(events: R) -> Self {
        Self { events }
    }
}

#[async_trait]
impl<R> IGetEventUseCase for GetEventUseCase<R>
where
    R: EventRepository + Send + Sync,
{
    async fn execute(
        &self,
        event_id: Uuid,
        viewer_id: Uuid,
    ) -> Result<EventDetails, GetEventError> {
        self.events
            .get_event_details(event_id, viewer_id)
            .await
            .map_err(|e| match e {
                EventRepositoryError::NotFound => GetEventError::NotFound,
                other => GetEventError::RepositoryError(other.to_string()),
            })
    }
}
