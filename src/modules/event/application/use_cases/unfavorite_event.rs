use async_trait::async_trait;
use uuid::Uuid;

use crate::event::application::ports::outgoing::event_repository::{
    EventRepository, EventRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UnfavoriteEventError {
    #[error("Event not found")]
    NotFound,

    #[error("Event is not in favorites")]
    NotFavorited,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUnfavoriteEventUseCase: Send + Sync {
    async fn execute(&self, event_id: Uuid, user_id: Uuid) -> Result<(), UnfavoriteEventError>;
}

pub struct UnfavoriteEventUseCase<R>
where
    R: EventRepository,
{
    events: R,
}

impl<R> UnfavoriteEventUseCase<R>
where
    R: EventRepository,
{
    pub fn new(events: R) -> Self {
        Self { events }
    }
}

#[async_trait]
impl<R> IUnfavoriteEventUseCase for UnfavoriteEventUseCase<R>
where
    R: EventRepository + Send + Sync,
{
    async fn execute(&self, event_id: Uuid, user_id: Uuid) -> Result<(), UnfavoriteEventError> {
        self.events
            .find_event(event_id)
            .await
            .map_err(|e| UnfavoriteEventError::RepositoryError(e.to_string()))?
            .ok_or(UnfavoriteEventError::NotFound)?;

        self.events
            .remove_favorite(event_id, user_id)
            .await
            .map_err(|e| match e {
                EventRepositoryError::NotFavorited => UnfavoriteEventError::NotFavorited,
                other => UnfavoriteEventError::RepositoryError(other.to_string()),
            })
    }
}
