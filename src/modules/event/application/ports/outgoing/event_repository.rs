use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::event::application::domain::entities::{Event, EventCategory, UserSummary};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep stored value
// - Null: explicitly null => clear (only valid for clearable fields)
// - Value(v): replace with v
//
// Serde behavior:
// - omitted field => Unset (via #[serde(default)])
// - null => Null
// - value => Value(value)
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateEventData {
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub category: EventCategory,
    pub images: Vec<String>,
    pub creator_id: Uuid,
}

/// Patch semantics:
/// - title/description/event_date/category: Unset => keep, Value => replace
///   (Null is rejected before it reaches the repository)
/// - images: Value(vec) => replace whole array, Null => clear to empty
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub title: PatchField<String>,
    pub description: PatchField<String>,
    pub event_date: PatchField<DateTime<Utc>>,
    pub category: PatchField<EventCategory>,
    pub images: PatchField<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSortField {
    EventDate,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone)]
pub struct EventListQuery {
    pub category: Option<EventCategory>,
    pub is_approved: Option<bool>,
    pub sort_by: EventSortField,
    pub order: SortDirection,
    pub skip: u64,
    pub limit: u64,
}

/// Listing row: the event plus its roster cardinality.
#[derive(Debug, Clone)]
pub struct EventListItem {
    pub event: Event,
    pub participants_count: u64,
}

/// Single-event view annotated for a known viewer.
#[derive(Debug, Clone)]
pub struct EventDetails {
    pub event: Event,
    pub joined: bool,
    pub participants_count: u64,
    pub is_favorite: bool,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum EventRepositoryError {
    #[error("Event not found")]
    NotFound,

    /// Roster pair already present; raised by the unique constraint, so two
    /// concurrent attends cannot both succeed.
    #[error("Already joined")]
    AlreadyJoined,

    #[error("Not joined")]
    NotJoined,

    #[error("Already favorited")]
    AlreadyFavorited,

    #[error("Not favorited")]
    NotFavorited,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Inserted rows are approved by construction.
    async fn create_event(&self, data: CreateEventData) -> Result<Event, EventRepositoryError>;

    async fn list_events(
        &self,
        query: EventListQuery,
    ) -> Result<Vec<EventListItem>, EventRepositoryError>;

    async fn find_event(&self, event_id: Uuid) -> Result<Option<Event>, EventRepositoryError>;

    async fn get_event_details(
        &self,
        event_id: Uuid,
        viewer_id: Uuid,
    ) -> Result<EventDetails, EventRepositoryError>;

    /// Ownership is checked by the use case; the repository only patches.
    async fn patch_event(
        &self,
        event_id: Uuid,
        patch: EventPatch,
    ) -> Result<Event, EventRepositoryError>;

    /// Favorites, roster rows and comments go with the event (FK cascade).
    async fn delete_event(&self, event_id: Uuid) -> Result<(), EventRepositoryError>;

    async fn list_by_creator(&self, creator_id: Uuid)
        -> Result<Vec<Event>, EventRepositoryError>;

    async fn add_participant(
        &self,
        event_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), EventRepositoryError>;

    async fn remove_participant(
        &self,
        event_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), EventRepositoryError>;

    async fn list_participants(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<UserSummary>, EventRepositoryError>;

    async fn add_favorite(&self, event_id: Uuid, user_id: Uuid)
        -> Result<(), EventRepositoryError>;

    async fn remove_favorite(
        &self,
        event_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), EventRepositoryError>;

    async fn list_favorites(&self, user_id: Uuid) -> Result<Vec<Event>, EventRepositoryError>;
}
