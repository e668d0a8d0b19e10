use async_trait::async_trait;
use uuid::Uuid;

use crate::event::application::ports::outgoing::event_repository::{
    EventRepository, EventRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AttendEventError {
    #[error("Event not found")]
    NotFound,

    #[error("Already joined this event")]
    AlreadyJoined,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IAttendEventUseCase: Send + Sync {
    async fn execute(&self, event_id: Uuid, user_id: Uuid) -> Result<(), AttendEventError>;
}

pub struct AttendEventUseCase<R>
where
    R: EventRepository,
{
    events: R,
}

impl<R> AttendEventUseCase<R>
where
    R: EventRepository,
{
    pub fn new(events: R) -> Self {
        Self { events }
    }
}

#[async_trait]
impl<R> IAttendEventUseCase for AttendEventUseCase<R>
where
    R: EventRepository + Send + Sync,
{
    async fn execute(&self, event_id: Uuid, user_id: Uuid) -> Result<(), AttendEventError> {
        self.events
            .find_event(event_id)
            .await
            .map_err(|e| AttendEventError::RepositoryError(e.to_string()))?
            .ok_or(AttendEventError::NotFound)?;

        // The roster pair's unique constraint decides the race; this call
        // fails AlreadyJoined even when two attends arrive simultaneously.
        self.events
            .add_participant(event_id, user_id)
            .await
            .map_err(|e| match e {
                EventRepositoryError::AlreadyJoined => AttendEventError::AlreadyJoined,
                other => AttendEventError::RepositoryError(other.to_string()),
            })
    }
}
