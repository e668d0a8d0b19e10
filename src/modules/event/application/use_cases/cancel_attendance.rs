use async_trait::async_trait;
use uuid::Uuid;

use crate::event::application::ports::outgoing::event_repository::{
    EventRepository, EventRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CancelAttendanceError {
    #[error("Event not found")]
    NotFound,

    #[error("Not joined to this event")]
    NotJoined,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICancelAttendanceUseCase: Send + Sync {
    async fn execute(&self, event_id: Uuid, user_id: Uuid) -> Result<(), CancelAttendanceError>;
}

pub struct CancelAttendanceUseCase<R>
where
    R: EventRepository,
{
    events: R,
}

impl<R> CancelAttendanceUseCase<R>
where
    R: EventRepository,
{
    pub fn new(events: R) -> Self {
        Self { events }
    }
}

#[async_trait]
impl<R> ICancelAttendanceUseCase for CancelAttendanceUseCase<R>
where
    R: EventRepository + Send + Sync,
{
    async fn execute(&self, event_id: Uuid, user_id: Uuid) -> Result<(), CancelAttendanceError> {
        self.events
            .find_event(event_id)
            .await
            .map_err(|e| CancelAttendanceError::RepositoryError(e.to_string()))?
            .ok_or(CancelAttendanceError::NotFound)?;

        self.events
            .remove_participant(event_id, user_id)
            .await
            .map_err(|e| match e {
                EventRepositoryError::NotJoined => CancelAttendanceError::NotJoined,
                other => CancelAttendanceError::RepositoryError(other.to_string()),
            })
    }
}
