use sea_orm::entity::prelude::*;
use uuid::Uuid;

/// Moderation queue. Row membership is the state machine: being here means
/// Submitted, leaving via approve means Published, leaving via reject means
/// Rejected.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "events_on_review")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub event_date: DateTimeWithTimeZone,
    pub category: String,
    pub creator_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
