pub mod approve_event;
pub mod edit_submission;
pub mod list_pending;
pub mod reject_event;
pub mod submit_event;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::event::application::domain::entities::EventCategory;
use crate::moderation::application::domain::entities::ReviewEvent;
use crate::moderation::application::ports::outgoing::review_repository::SubmissionFields;

pub use approve_event::approve_event_handler;
pub use edit_submission::edit_submission_handler;
pub use list_pending::list_pending_handler;
pub use reject_event::reject_event_handler;
pub use submit_event::submit_event_handler;

/// Wire form of a queued submission.
#[derive(Serialize, ToSchema)]
pub struct ReviewEventResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub category: EventCategory,
    pub creator_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<ReviewEvent> for ReviewEventResponse {
    fn from(review: ReviewEvent) -> Self {
        Self {
            id: review.id.to_string(),
            title: review.title,
            description: review.description,
            event_date: review.event_date,
            category: review.category,
            creator_id: review.creator_id.to_string(),
            created_at: review.created_at,
        }
    }
}

/// Submission body; every field is required, both on create and on edit.
#[derive(Deserialize, ToSchema)]
pub struct SubmissionFieldsDto {
    #[schema(example = "Street food festival")]
    pub title: String,

    pub description: String,

    pub event_date: DateTime<Utc>,

    pub category: EventCategory,
}

impl From<SubmissionFieldsDto> for SubmissionFields {
    fn from(dto: SubmissionFieldsDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            event_date: dto.event_date,
            category: dto.category,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct ModerationStatusResponse {
    pub status: &'static str,
}
