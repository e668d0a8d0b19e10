use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set, TransactionError,
    TransactionTrait,
};
use uuid::Uuid;

use crate::event::adapter::outgoing::sea_orm_entity::events;
use crate::event::application::domain::entities::{Event, EventCategory};
use crate::moderation::adapter::outgoing::sea_orm_entity::events_on_review;
use crate::moderation::application::domain::entities::ReviewEvent;
use crate::moderation::application::ports::outgoing::review_repository::{
    NewSubmission, ReviewRepository, ReviewRepositoryError, SubmissionFields,
};

#[derive(Clone)]
pub struct ReviewRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReviewRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryPostgres {
    async fn insert_submission(
        &self,
        data: NewSubmission,
    ) -> Result<ReviewEvent, ReviewRepositoryError> {
        let model = events_on_review::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.fields.title.trim().to_string()),
            description: Set(data.fields.description),
            event_date: Set(data.fields.event_date.fixed_offset()),
            category: Set(data.fields.category.as_str().to_string()),
            creator_id: Set(data.creator_id),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_review(result)
    }

    async fn list_pending(&self) -> Result<Vec<ReviewEvent>, ReviewRepositoryError> {
        let models = events_on_review::Entity::find()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_review).collect()
    }

    async fn find_submission(
        &self,
        submission_id: Uuid,
    ) -> Result<Option<ReviewEvent>, ReviewRepositoryError> {
        let found = events_on_review::Entity::find_by_id(submission_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        found.map(model_to_review).transpose()
    }

    async fn replace_submission(
        &self,
        submission_id: Uuid,
        fields: SubmissionFields,
    ) -> Result<ReviewEvent, ReviewRepositoryError> {
        let found = events_on_review::Entity::find_by_id(submission_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ReviewRepositoryError::NotFound)?;

        let mut model: events_on_review::ActiveModel = found.into();
        model.title = Set(fields.title.trim().to_string());
        model.description = Set(fields.description);
        model.event_date = Set(fields.event_date.fixed_offset());
        model.category = Set(fields.category.as_str().to_string());

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;

        model_to_review(updated)
    }

    async fn publish_submission(
        &self,
        submission_id: Uuid,
    ) -> Result<Event, ReviewRepositoryError> {
        // Copy + delete must commit together: if either side fails, neither
        // happens, so a submission is never live in both tables.
        let published = self
            .db
            .transaction::<_, Option<events::Model>, DbErr>(move |txn| {
                Box::pin(async move {
                    let review = match events_on_review::Entity::find_by_id(submission_id)
                        .one(txn)
                        .await?
                    {
                        Some(review) => review,
                        None => return Ok(None),
                    };

                    let event = events::ActiveModel {
                        id: Set(Uuid::new_v4()),
                        title: Set(review.title.clone()),
                        description: Set(review.description.clone()),
                        event_date: Set(review.event_date),
                        category: Set(review.category.clone()),
                        images: Set(serde_json::json!([])),
                        is_approved: Set(true),
                        creator_id: Set(review.creator_id),
                        created_at: Set(Utc::now().fixed_offset()),
                    }
                    .insert(txn)
                    .await?;

                    events_on_review::Entity::delete_by_id(submission_id)
                        .exec(txn)
                        .await?;

                    Ok(Some(event))
                })
            })
            .await
            .map_err(map_txn_err)?;

        let model = published.ok_or(ReviewRepositoryError::NotFound)?;

        model_to_event(model)
    }

    async fn delete_submission(
        &self,
        submission_id: Uuid,
    ) -> Result<(), ReviewRepositoryError> {
        let result = events_on_review::Entity::delete_by_id(submission_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ReviewRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn parse_category(raw: &str) -> Result<EventCategory, ReviewRepositoryError> {
    EventCategory::parse(raw).ok_or_else(|| {
        ReviewRepositoryError::SerializationError(format!("Unknown category in store: {}", raw))
    })
}

fn model_to_review(
    model: events_on_review::Model,
) -> Result<ReviewEvent, ReviewRepositoryError> {
    Ok(ReviewEvent {
        id: model.id,
        title: model.title,
        description: model.description,
        event_date: model.event_date.into(),
        category: parse_category(&model.category)?,
        creator_id: model.creator_id,
        created_at: model.created_at.into(),
    })
}

fn model_to_event(model: events::Model) -> Result<Event, ReviewRepositoryError> {
    let images = serde_json::from_value(model.images.clone())
        .map_err(|e| ReviewRepositoryError::SerializationError(e.to_string()))?;

    Ok(Event {
        id: model.id,
        title: model.title,
        description: model.description,
        event_date: model.event_date.into(),
        category: parse_category(&model.category)?,
        images,
        is_approved: model.is_approved,
        creator_id: model.creator_id,
        created_at: model.created_at.into(),
    })
}

fn map_db_err(e: DbErr) -> ReviewRepositoryError {
    ReviewRepositoryError::DatabaseError(e.to_string())
}

fn map_txn_err(e: TransactionError<DbErr>) -> ReviewRepositoryError {
    match e {
        TransactionError::Connection(err) => map_db_err(err),
        TransactionError::Transaction(err) => map_db_err(err),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn mock_review_model(id: Uuid, creator_id: Uuid) -> events_on_review::Model {
        events_on_review::Model {
            id,
            title: "Street food festival".to_string(),
            description: "Weekend market".to_string(),
            event_date: Utc::now().fixed_offset(),
            category: "other".to_string(),
            creator_id,
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn insert_submission_maps_the_row_back() {
        let id = Uuid::new_v4();
        let creator = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![mock_review_model(id, creator)]])
            .into_connection();

        let repo = ReviewRepositoryPostgres::new(Arc::new(db));

        let submission = repo
            .insert_submission(NewSubmission {
                fields: SubmissionFields {
                    title: "Street food festival".to_string(),
                    description: "Weekend market".to_string(),
                    event_date: Utc::now(),
                    category: EventCategory::Other,
                },
                creator_id: creator,
            })
            .await
            .unwrap();

        assert_eq!(submission.creator_id, creator);
        assert_eq!(submission.category, EventCategory::Other);
    }

    #[tokio::test]
    async fn delete_submission_not_found_when_no_rows_affected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = ReviewRepositoryPostgres::new(Arc::new(db));

        let result = repo.delete_submission(Uuid::new_v4()).await;
        assert!(matches!(result, Err(ReviewRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn publish_of_a_missing_submission_is_not_found() {
        // Transaction begins, the lookup returns nothing, rollback.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<events_on_review::Model>::new()])
            .into_connection();

        let repo = ReviewRepositoryPostgres::new(Arc::new(db));

        let result = repo.publish_submission(Uuid::new_v4()).await;
        assert!(matches!(result, Err(ReviewRepositoryError::NotFound)));
    }
}
