use async_trait::async_trait;

use crate::event::application::domain::entities::Event;
use crate::event::application::ports::outgoing::event_repository::{
    CreateEventData, EventRepository, EventRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateEventError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Direct creation path. The admin gate sits in front of this in the
/// handler; whatever lands here is published immediately.
#[async_trait]
pub trait ICreateEventUseCase: Send + Sync {
    async fn execute(&self, data: CreateEventData) -> Result<Event, CreateEventError>;
}

pub struct CreateEventUseCase<R>
where
    R: EventRepository,
{
    events: R,
}

impl<R> CreateEventUseCase<R>
where
    R: EventRepository,
{
    pub fn new(events: R) -> Self {
        Self { events }
    }
}

#[async_trait]
impl<R> ICreateEventUseCase for CreateEventUseCase<R>
where
    R: EventRepository + Send + Sync,
{
    async fn execute(&self, data: CreateEventData) -> Result<Event, CreateEventError> {
        self.events
            .create_event(data)
            .await
            .map_err(|e: EventRepositoryError| CreateEventError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::event::application::domain::entities::EventCategory;
    use crate::event::application::use_cases::test_support::MockEventRepo;

    #[tokio::test]
    async fn created_event_is_approved_and_owned_by_the_admin() {
        let admin_id = Uuid::new_v4();
        let use_case = CreateEventUseCase::new(MockEventRepo::default());

        let event = use_case
            .execute(CreateEventData {
                title: "Derby final".to_string(),
                description: "City stadium".to_string(),
                event_date: Utc::now(),
                category: EventCategory::Sport,
                images: vec![],
                creator_id: admin_id,
            })
            .await
            .unwrap();

        assert!(event.is_approved);
        assert_eq!(event.creator_id, admin_id);
        assert_eq!(event.category, EventCategory::Sport);
    }

    #[tokio::test]
    async fn repository_failure_is_propagated() {
        let use_case = CreateEventUseCase::new(MockEventRepo {
            create_result: Err(EventRepositoryError::DatabaseError("db down".to_string())),
            ..Default::default()
        });

        let result = use_case
            .execute(CreateEventData {
                title: "t".to_string(),
                description: "d".to_string(),
                event_date: Utc::now(),
                category: EventCategory::Other,
                images: vec![],
                creator_id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result, Err(CreateEventError::RepositoryError(_))));
    }
}
