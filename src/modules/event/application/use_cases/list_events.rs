use async_trait::async_trait;

use crate::event::application::ports::outgoing::event_repository::{
    EventListItem, EventListQuery, EventRepository,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListEventsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IListEventsUseCase: Send + Sync {
    async fn execute(&self, query: EventListQuery) -> Result<Vec<EventListItem>, ListEventsError>;
}

pub struct ListEventsUseCase<R>
where
    R: EventRepository,
{
    events: R,
}

impl<R> ListEventsUseCase<R>
where
    R: EventRepository,
{
    pub fn new(events: R) -> Self {
        Self { events }
    }
}

#[async_trait]
impl<R> IListEventsUseCase for ListEventsUseCase<R>
where
    R: EventRepository + Send + Sync,
{
    async fn execute(&self, query: EventListQuery) -> Result<Vec<EventListItem>, ListEventsError> {
        self.events
            .list_events(query)
            .await
            .map_err(|e| ListEventsError::RepositoryError(e.to_string()))
    }
}
