use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::event::application::domain::entities::{Event, EventCategory};
use crate::moderation::application::domain::entities::ReviewEvent;

/// Descriptive fields of a submission. Edits replace all of them at once;
/// there is no partial form on this side of the fence.
#[derive(Debug, Clone)]
pub struct SubmissionFields {
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub category: EventCategory,
}

#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub fields: SubmissionFields,
    pub creator_id: Uuid,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReviewRepositoryError {
    #[error("Submission not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn insert_submission(
        &self,
        data: NewSubmission,
    ) -> Result<ReviewEvent, ReviewRepositoryError>;

    /// Everything currently in the queue, i.e. everything Submitted.
    async fn list_pending(&self) -> Result<Vec<ReviewEvent>, ReviewRepositoryError>;

    async fn find_submission(
        &self,
        submission_id: Uuid,
    ) -> Result<Option<ReviewEvent>, ReviewRepositoryError>;

    /// Full replacement of the descriptive fields.
    async fn replace_submission(
        &self,
        submission_id: Uuid,
        fields: SubmissionFields,
    ) -> Result<ReviewEvent, ReviewRepositoryError>;

    /// The approve transition: copy into the event directory and delete the
    /// review row as ONE transaction. A submission must never be live in
    /// both tables.
    async fn publish_submission(
        &self,
        submission_id: Uuid,
    ) -> Result<Event, ReviewRepositoryError>;

    /// The reject transition: delete the review row, no copy.
    async fn delete_submission(&self, submission_id: Uuid)
        -> Result<(), ReviewRepositoryError>;
}
