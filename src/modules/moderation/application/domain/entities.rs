use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::event::application::domain::entities::EventCategory;

/// A submission awaiting review. Presence of the row *is* the Submitted
/// state: approval copies it into the event directory and removes it,
/// rejection just removes it. There is no status column to forget.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewEvent {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub category: EventCategory,
    pub creator_id: Uuid,
    pub created_at: DateTime<Utc>,
}
