use async_trait::async_trait;
use uuid::Uuid;

use crate::event::application::ports::outgoing::event_repository::{
    EventRepository, EventRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteEventError {
    #[error("Event not found")]
    NotFound,

    #[error("No permission to delete this event")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteEventUseCase: Send + Sync {
    async fn execute(&self, event_id: Uuid, actor_id: Uuid) -> Result<(), DeleteEventError>;
}

pub struct DeleteEventUseCase<R>
where
    R: EventRepository,
{
    events: R,
}

impl<R> DeleteEventUseCase<R>
where
    R: EventRepository,
{
    pub fn new(events: R) -> Self {
        Self { events }
    }
}

#[async_trait]
impl<R> IDeleteEventUseCase for DeleteEventUseCase<R>
where
    R: EventRepository + Send + Sync,
{
    async fn execute(&self, event_id: Uuid, actor_id: Uuid) -> Result<(), DeleteEventError> {
        let event = self
            .events
            .find_event(event_id)
            .await
            .map_err(|e| DeleteEventError::RepositoryError(e.to_string()))?
            .ok_or(DeleteEventError::NotFound)?;

        if event.creator_id != actor_id {
            return Err(DeleteEventError::Forbidden);
        }

        self.events
            .delete_event(event_id)
            .await
            .map_err(|e| match e {
                EventRepositoryError::NotFound => DeleteEventError::NotFound,
                other => DeleteEventError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::event::application::use_cases::test_support::{sample_event, MockEventRepo};

    #[tokio::test]
    async fn creator_can_delete_their_event() {
        let creator = Uuid::new_v4();
        let event = sample_event(creator);

        let use_case = DeleteEventUseCase::new(MockEventRepo {
            find_result: Ok(Some(event.clone())),
            ..Default::default()
        });

        assert!(use_case.execute(event.id, creator).await.is_ok());
    }

    #[tokio::test]
    async fn non_creator_is_forbidden() {
        let event = sample_event(Uuid::new_v4());

        let use_case = DeleteEventUseCase::new(MockEventRepo {
            find_result: Ok(Some(event.clone())),
            ..Default::default()
        });

        let result = use_case.execute(event.id, Uuid::new_v4()).await;

        assert!(matches!(result, Err(DeleteEventError::Forbidden)));
    }

    #[tokio::test]
    async fn missing_event_yields_not_found() {
        let use_case = DeleteEventUseCase::new(MockEventRepo::default());

        let result = use_case.execute(Uuid::new_v4(), Uuid::new_v4()).await;

        assert!(matches!(result, Err(DeleteEventError::NotFound)));
    }
}
