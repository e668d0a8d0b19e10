pub mod attend_event;
pub mod cancel_attendance;
pub mod create_event;
pub mod delete_event;
pub mod events_by_user;
pub mod favorite_event;
pub mod get_event;
pub mod list_events;
pub mod list_favorites;
pub mod list_participants;
pub mod unfavorite_event;
pub mod update_event;

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::event::application::domain::entities::{Event, EventCategory, UserSummary};

pub use attend_event::attend_event_handler;
pub use cancel_attendance::cancel_attendance_handler;
pub use create_event::{create_event_handler, CreateEventDto};
pub use delete_event::delete_event_handler;
pub use events_by_user::events_by_user_handler;
pub use favorite_event::favorite_event_handler;
pub use get_event::get_event_handler;
pub use list_events::{list_events_handler, ListEventsQueryDto};
pub use list_favorites::list_favorites_handler;
pub use list_participants::list_participants_handler;
pub use unfavorite_event::unfavorite_event_handler;
pub use update_event::{update_event_handler, UpdateEventDto};

/// Wire form of a published event, shared by every event-returning route.
#[derive(Serialize, ToSchema)]
pub struct EventResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub category: EventCategory,
    pub images: Vec<String>,
    pub is_approved: bool,
    pub creator_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id.to_string(),
            title: event.title,
            description: event.description,
            event_date: event.event_date,
            category: event.category,
            images: event.images,
            is_approved: event.is_approved,
            creator_id: event.creator_id.to_string(),
            created_at: event.created_at,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct EventListItemResponse {
    #[serde(flatten)]
    pub event: EventResponse,
    pub participants_count: u64,
}

#[derive(Serialize, ToSchema)]
pub struct EventDetailsResponse {
    #[serde(flatten)]
    pub event: EventResponse,
    pub joined: bool,
    pub participants_count: u64,
    pub is_favorite: bool,
}

#[derive(Serialize, ToSchema)]
pub struct ParticipantResponse {
    pub id: String,
    pub username: String,
    pub avatar_url: Option<String>,
}

impl From<UserSummary> for ParticipantResponse {
    fn from(summary: UserSummary) -> Self {
        Self {
            id: summary.id.to_string(),
            username: summary.username,
            avatar_url: summary.avatar_url,
        }
    }
}

/// Terse acknowledgement for roster/favorite mutations.
#[derive(Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: &'static str,
}
