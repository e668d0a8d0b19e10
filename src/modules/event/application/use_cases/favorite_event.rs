use async_trait::async_trait;
use uuid::Uuid;

use crate::event::application::ports::outgoing::event_repository::{
    EventRepository, EventRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FavoriteEventError {
    #[error("Event not found")]
    NotFound,

    #[error("Event already in favorites")]
    AlreadyFavorited,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IFavoriteEventUseCase: Send + Sync {
    async fn execute(&self, event_id: Uuid, user_id: Uuid) -> Result<(), FavoriteEventError>;
}

pub struct FavoriteEventUseCase<R>
where
    R: EventRepository,
{
    events: R,
}

impl<R> FavoriteEventUseCase<R>
where
    R: EventRepository,
{
    pub fn new(events: R) -> Self {
        Self { events }
    }
}

#[async_trait]
impl<R> IFavoriteEventUseCase for FavoriteEventUseCase<R>
where
    R: EventRepository + Send + Sync,
{
    async fn execute(&self, event_id: Uuid, user_id: Uuid) -> Result<(), FavoriteEventError> {
        self.events
            .find_event(event_id)
            .await
            .map_err(|e| FavoriteEventError::RepositoryError(e.to_string()))?
            .ok_or(FavoriteEventError::NotFound)?;

        // Unique (user_id, event_id) index backs the duplicate check.
        self.events
            .add_favorite(event_id, user_id)
            .await
            .map_err(|e| match e {
                EventRepositoryError::AlreadyFavorited => FavoriteEventError::AlreadyFavorited,
                other => FavoriteEventError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::event::application::use_cases::test_support::{sample_event, MockEventRepo};

    #[tokio::test]
    async fn favoriting_an_existing_event_succeeds() {
        let event = sample_event(Uuid::new_v4());
        let use_case = FavoriteEventUseCase::new(MockEventRepo {
            find_result: Ok(Some(event.clone())),
            ..Default::default()
        });

        assert!(use_case.execute(event.id, Uuid::new_v4()).await.is_ok());
    }

    #[tokio::test]
    async fn duplicate_favorite_is_rejected() {
        let event = sample_event(Uuid::new_v4());
        let use_case = FavoriteEventUseCase::new(MockEventRepo {
            find_result: Ok(Some(event.clone())),
            add_favorite_result: Err(EventRepositoryError::AlreadyFavorited),
            ..Default::default()
        });

        let result = use_case.execute(event.id, Uuid::new_v4()).await;

        assert!(matches!(result, Err(FavoriteEventError::AlreadyFavorited)));
    }

    #[tokio::test]
    async fn favoriting_a_missing_event_fails_not_found() {
        let use_case = FavoriteEventUseCase::new(MockEventRepo::default());

        let result = use_case.execute(Uuid::new_v4(), Uuid::new_v4()).await;

        assert!(matches!(result, Err(FavoriteEventError::NotFound)));
    }
}
