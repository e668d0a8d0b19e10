use async_trait::async_trait;
use uuid::Uuid;

use crate::event::application::domain::entities::Event;
use crate::event::application::ports::outgoing::event_repository::EventRepository;

#[derive(Debug, Clone, thiserror::Error)]
pub enum EventsByCreatorError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Public: anyone may look up what a user has published.
#[async_trait]
pub trait IEventsByCreatorUseCase: Send + Sync {
    async fn execute(&self, creator_id: Uuid) -> Result<Vec<Event>, EventsByCreatorError>;
}

pub struct EventsByCreatorUseCase<R>
where
    R: EventRepository,
{
    events: R,
}

impl<R> EventsByCreatorUseCase<R>
where
    R: EventRepository,
{
    pub fn new(events: R) -> Self {
        Self { events }
    }
}

#[async_trait]
impl<R> IEventsByCreatorUseCase for EventsByCreatorUseCase<R>
where
    R: EventRepository + Send + Sync,
{
    async fn execute(&self, creator_id: Uuid) -> Result<Vec<Event>, EventsByCreatorError> {
        self.events
            .list_by_creator(creator_id)
            .await
            .map_err(|e| EventsByCreatorError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::event::application::use_cases::test_support::{sample_event, MockEventRepo};

    #[tokio::test]
    async fn returns_creator_events() {
        let creator = Uuid::new_v4();
        let use_case = EventsByCreatorUseCase::new(MockEventRepo {
            by_creator_result: Ok(vec![sample_event(creator)]),
            ..Default::default()
        });

        let events = use_case.execute(creator).await.unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].creator_id, creator);
    }
}
