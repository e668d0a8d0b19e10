use async_trait::async_trait;
use uuid::Uuid;

use crate::event::application::domain::entities::Event;
use crate::event::application::ports::outgoing::event_repository::{
    EventPatch, EventRepository, EventRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateEventError {
    #[error("Event not found")]
    NotFound,

    /// Acting user is not the creator.
    #[error("No permission to edit this event")]
    Forbidden,

    #[error("Field cannot be cleared: {0}")]
    FieldNotNullable(&'static str),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdateEventUseCase: Send + Sync {
    async fn execute(
        &self,
        event_id: Uuid,
        actor_id: Uuid,
        patch: EventPatch,
    ) -> Result<Event, UpdateEventError>;
}

pub struct UpdateEventUseCase<R>
where
    R: EventRepository,
{
    events: R,
}

impl<R> UpdateEventUseCase<R>
where
    R: EventRepository,
{
    pub fn new(events: R) -> Self {
        Self { events }
    }
}

/// Only `images` may be cleared with an explicit null.
fn reject_null_on_required(patch: &EventPatch) -> Result<(), UpdateEventError> {
    if patch.title.is_null() {
        return Err(UpdateEventError::FieldNotNullable("title"));
    }
    if patch.description.is_null() {
        return Err(UpdateEventError::FieldNotNullable("description"));
    }
    if patch.event_date.is_null() {
        return Err(UpdateEventError::FieldNotNullable("event_date"));
    }
    if patch.category.is_null() {
        return Err(UpdateEventError::FieldNotNullable("category"));
    }
    Ok(())
}

#[async_trait]
impl<R> IUpdateEventUseCase for UpdateEventUseCase<R>
where
    R: EventRepository + Send + Sync,
{
    async fn execute(
        &self,
        event_id: Uuid,
        actor_id: Uuid,
        patch: EventPatch,
    ) -> Result<Event, UpdateEventError> {
        reject_null_on_required(&patch)?;

        // NotFound and Forbidden are distinct here, unlike comment deletion.
        let event = self
            .events
            .find_event(event_id)
            .await
            .map_err(|e| UpdateEventError::RepositoryError(e.to_string()))?
            .ok_or(UpdateEventError::NotFound)?;

        if event.creator_id != actor_id {
            return Err(UpdateEventError::Forbidden);
        }

        self.events
            .patch_event(event_id, patch)
            .await
            .map_err(|e| match e {
                EventRepositoryError::NotFound => UpdateEventError::NotFound,
                other => UpdateEventError::RepositoryError(other.to_string()),
            })
    }
}
