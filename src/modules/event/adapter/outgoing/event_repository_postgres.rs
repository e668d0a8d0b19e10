use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::event::adapter::outgoing::sea_orm_entity::{event_participants, events, favorites};
use crate::event::application::domain::entities::{Event, EventCategory, UserSummary};
use crate::event::application::ports::outgoing::event_repository::{
    CreateEventData, EventDetails, EventListItem, EventListQuery, EventPatch, EventRepository,
    EventRepositoryError, EventSortField, PatchField, SortDirection,
};

#[derive(Clone)]
pub struct EventRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EventRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Roster cardinality for a page of events, one grouped query.
    async fn participant_counts(
        &self,
        event_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, i64>, EventRepositoryError> {
        if event_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let counts: Vec<(Uuid, i64)> = event_participants::Entity::find()
            .select_only()
            .column(event_participants::Column::EventId)
            .column_as(event_participants::Column::UserId.count(), "count")
            .filter(event_participants::Column::EventId.is_in(event_ids))
            .group_by(event_participants::Column::EventId)
            .into_tuple()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(counts.into_iter().collect())
    }
}

#[async_trait]
impl EventRepository for EventRepositoryPostgres {
    async fn create_event(&self, data: CreateEventData) -> Result<Event, EventRepositoryError> {
        let model = events::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title.trim().to_string()),
            description: Set(data.description),
            event_date: Set(data.event_date.fixed_offset()),
            category: Set(data.category.as_str().to_string()),
            images: Set(to_json(&data.images)?),
            is_approved: Set(true),
            creator_id: Set(data.creator_id),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_event(result)
    }

    async fn list_events(
        &self,
        query: EventListQuery,
    ) -> Result<Vec<EventListItem>, EventRepositoryError> {
        let mut select = events::Entity::find();

        if let Some(category) = query.category {
            select = select.filter(events::Column::Category.eq(category.as_str()));
        }
        if let Some(approved) = query.is_approved {
            select = select.filter(events::Column::IsApproved.eq(approved));
        }

        let column = match query.sort_by {
            EventSortField::EventDate => events::Column::EventDate,
            EventSortField::CreatedAt => events::Column::CreatedAt,
        };
        select = match query.order {
            SortDirection::Asc => select.order_by_asc(column),
            SortDirection::Desc => select.order_by_desc(column),
        };

        let models = select
            .offset(query.skip)
            .limit(query.limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let counts = self
            .participant_counts(models.iter().map(|m| m.id).collect())
            .await?;

        models
            .into_iter()
            .map(|model| {
                let count = counts.get(&model.id).copied().unwrap_or(0) as u64;
                Ok(EventListItem {
                    event: model_to_event(model)?,
                    participants_count: count,
                })
            })
            .collect()
    }

    async fn find_event(&self, event_id: Uuid) -> Result<Option<Event>, EventRepositoryError> {
        let found = events::Entity::find_by_id(event_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        found.map(model_to_event).transpose()
    }

    async fn get_event_details(
        &self,
        event_id: Uuid,
        viewer_id: Uuid,
    ) -> Result<EventDetails, EventRepositoryError> {
        let model = events::Entity::find_by_id(event_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(EventRepositoryError::NotFound)?;

        let participants_count = event_participants::Entity::find()
            .filter(event_participants::Column::EventId.eq(event_id))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        let joined = event_participants::Entity::find()
            .filter(event_participants::Column::EventId.eq(event_id))
            .filter(event_participants::Column::UserId.eq(viewer_id))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?
            > 0;

        let is_favorite = favorites::Entity::find()
            .filter(favorites::Column::EventId.eq(event_id))
            .filter(favorites::Column::UserId.eq(viewer_id))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?
            > 0;

        Ok(EventDetails {
            event: model_to_event(model)?,
            joined,
            participants_count,
            is_favorite,
        })
    }

    async fn patch_event(
        &self,
        event_id: Uuid,
        patch: EventPatch,
    ) -> Result<Event, EventRepositoryError> {
        let mut model = <events::ActiveModel as Default>::default();

        if let PatchField::Value(title) = patch.title {
            model.title = Set(title.trim().to_string());
        }

        if let PatchField::Value(description) = patch.description {
            model.description = Set(description);
        }

        if let PatchField::Value(event_date) = patch.event_date {
            model.event_date = Set(event_date.fixed_offset());
        }

        if let PatchField::Value(category) = patch.category {
            model.category = Set(category.as_str().to_string());
        }

        match patch.images {
            PatchField::Unset => {}
            PatchField::Null => model.images = Set(to_json(&Vec::<String>::new())?),
            PatchField::Value(images) => model.images = Set(to_json(&images)?),
        }

        let has_changes = model.title.is_set()
            || model.description.is_set()
            || model.event_date.is_set()
            || model.category.is_set()
            || model.images.is_set();

        if !has_changes {
            let result = events::Entity::find_by_id(event_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(EventRepositoryError::NotFound)?;

            return model_to_event(result);
        }

        let results = events::Entity::update_many()
            .set(model)
            .filter(events::Column::Id.eq(event_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(EventRepositoryError::NotFound)?;

        model_to_event(result)
    }

    async fn delete_event(&self, event_id: Uuid) -> Result<(), EventRepositoryError> {
        // Favorites, roster rows and comments go via ON DELETE CASCADE.
        let result = events::Entity::delete_by_id(event_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(EventRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn list_by_creator(
        &self,
        creator_id: Uuid,
    ) -> Result<Vec<Event>, EventRepositoryError> {
        let models = events::Entity::find()
            .filter(events::Column::CreatorId.eq(creator_id))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_event).collect()
    }

    async fn add_participant(
        &self,
        event_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), EventRepositoryError> {
        let model = event_participants::ActiveModel {
            user_id: Set(user_id),
            event_id: Set(event_id),
        };

        model
            .insert(&*self.db)
            .await
            .map_err(|e| map_pair_error(e, EventRepositoryError::AlreadyJoined))?;

        Ok(())
    }

    async fn remove_participant(
        &self,
        event_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), EventRepositoryError> {
        let result = event_participants::Entity::delete_many()
            .filter(event_participants::Column::EventId.eq(event_id))
            .filter(event_participants::Column::UserId.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(EventRepositoryError::NotJoined);
        }

        Ok(())
    }

    async fn list_participants(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<UserSummary>, EventRepositoryError> {
        let rows = event_participants::Entity::find()
            .filter(event_participants::Column::EventId.eq(event_id))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let user_ids: Vec<Uuid> = rows.into_iter().map(|row| row.user_id).collect();
        if user_ids.is_empty() {
            return Ok(vec![]);
        }

        let members = users::Entity::find()
            .filter(users::Column::Id.is_in(user_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(members
            .into_iter()
            .map(|user| UserSummary {
                id: user.id,
                username: user.username,
                avatar_url: user.avatar_url,
            })
            .collect())
    }

    async fn add_favorite(
        &self,
        event_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), EventRepositoryError> {
        let model = favorites::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            event_id: Set(event_id),
            created_at: Set(Utc::now().fixed_offset()),
        };

        model
            .insert(&*self.db)
            .await
            .map_err(|e| map_pair_error(e, EventRepositoryError::AlreadyFavorited))?;

        Ok(())
    }

    async fn remove_favorite(
        &self,
        event_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), EventRepositoryError> {
        let result = favorites::Entity::delete_many()
            .filter(favorites::Column::EventId.eq(event_id))
            .filter(favorites::Column::UserId.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(EventRepositoryError::NotFavorited);
        }

        Ok(())
    }

    async fn list_favorites(&self, user_id: Uuid) -> Result<Vec<Event>, EventRepositoryError> {
        let rows = favorites::Entity::find()
            .filter(favorites::Column::UserId.eq(user_id))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let event_ids: Vec<Uuid> = rows.into_iter().map(|row| row.event_id).collect();
        if event_ids.is_empty() {
            return Ok(vec![]);
        }

        let models = events::Entity::find()
            .filter(events::Column::Id.is_in(event_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_event).collect()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_event(model: events::Model) -> Result<Event, EventRepositoryError> {
    let category = EventCategory::parse(&model.category).ok_or_else(|| {
        EventRepositoryError::SerializationError(format!(
            "Unknown category in store: {}",
            model.category
        ))
    })?;

    Ok(Event {
        id: model.id,
        title: model.title,
        description: model.description,
        event_date: model.event_date.into(),
        category,
        images: from_json(&model.images)?,
        is_approved: model.is_approved,
        creator_id: model.creator_id,
        created_at: model.created_at.into(),
    })
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, EventRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| EventRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, EventRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| EventRepositoryError::SerializationError(e.to_string()))
}

/// Unique-pair violations become the given domain error; everything else is
/// a plain database failure.
fn map_pair_error(e: DbErr, on_duplicate: EventRepositoryError) -> EventRepositoryError {
    let msg = e.to_string().to_lowercase();

    if msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505") {
        on_duplicate
    } else {
        EventRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> EventRepositoryError {
    EventRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
