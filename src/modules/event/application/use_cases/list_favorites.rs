use async_trait::async_trait;
use uuid::Uuid;

use crate::event::application::domain::entities::Event;
use crate::event::application::ports::outgoing::event_repository::EventRepository;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListFavoritesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Events reached through the caller's favorite rows.
#[async_trait]
pub trait IListFavoritesUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<Vec<Event>, ListFavoritesError>;
}

pub struct ListFavoritesUseCase<R>
where
    R: EventRepository,
{
    events: R,
}

impl<R> ListFavoritesUseCase<R>
where
    R: EventRepository,
{
    pub fn new(events: R) -> Self {
        Self { events }
    }
}

#[async_trait]
impl<R> IListFavoritesUseCase for ListFavoritesUseCase<R>
where
    R: EventRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<Vec<Event>, ListFavoritesError> {
        self.events
            .list_favorites(user_id)
            .await
            .map_err(|e| ListFavoritesError::RepositoryError(e.to_string()))
    }
}
