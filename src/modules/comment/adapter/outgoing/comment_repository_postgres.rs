use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::comment::adapter::outgoing::sea_orm_entity::comments;
use crate::comment::application::domain::entities::Comment;
use crate::comment::application::ports::outgoing::comment_repository::{
    CommentRepository, CommentRepositoryError, NewComment,
};

#[derive(Clone)]
pub struct CommentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for CommentRepositoryPostgres {
    async fn insert_comment(&self, data: NewComment) -> Result<Comment, CommentRepositoryError> {
        let model = comments::ActiveModel {
            id: Set(Uuid::new_v4()),
            text: Set(data.text),
            user_id: Set(data.user_id),
            event_id: Set(data.event_id),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_comment(result))
    }

    async fn list_for_event(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<Comment>, CommentRepositoryError> {
        let models = comments::Entity::find()
            .filter(comments::Column::EventId.eq(event_id))
            .order_by_desc(comments::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_comment).collect())
    }

    async fn delete_by_author(
        &self,
        comment_id: Uuid,
        author_id: Uuid,
    ) -> Result<(), CommentRepositoryError> {
        // Ownership folded into the filter: a non-owner's delete affects
        // zero rows and reads as NotFound.
        let result = comments::Entity::delete_many()
            .filter(comments::Column::Id.eq(comment_id))
            .filter(comments::Column::UserId.eq(author_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CommentRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn model_to_comment(model: comments::Model) -> Comment {
    Comment {
        id: model.id,
        text: model.text,
        user_id: model.user_id,
        event_id: model.event_id,
        created_at: model.created_at.into(),
    }
}

fn map_db_err(e: DbErr) -> CommentRepositoryError {
    CommentRepositoryError::DatabaseError(e.to_string())
}
