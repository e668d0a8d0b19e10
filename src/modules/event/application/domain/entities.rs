use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed category set; persisted as its lowercase string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Concert,
    Sport,
    Cinema,
    Other,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Concert => "concert",
            EventCategory::Sport => "sport",
            EventCategory::Cinema => "cinema",
            EventCategory::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "concert" => Some(EventCategory::Concert),
            "sport" => Some(EventCategory::Sport),
            "cinema" => Some(EventCategory::Cinema),
            "other" => Some(EventCategory::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A published event. Rows in the events table are approved by
/// construction: the only ways in are admin creation and moderation
/// approval.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub category: EventCategory,
    pub images: Vec<String>,
    pub is_approved: bool,
    pub creator_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Public projection of a user on rosters and participant lists.
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub username: String,
    pub avatar_url: Option<String>,
}
