pub use sea_orm_migration::prelude::*;

mod m20260715_000001_create_users_table;
mod m20260715_000002_create_events_table;
mod m20260715_000003_create_event_participants_table;
mod m20260715_000004_create_events_on_review_table;
mod m20260715_000005_create_comments_table;
mod m20260715_000006_create_favorites_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260715_000001_create_users_table::Migration),
            Box::new(m20260715_000002_create_events_table::Migration),
            Box::new(m20260715_000003_create_event_participants_table::Migration),
            Box::new(m20260715_000004_create_events_on_review_table::Migration),
            Box::new(m20260715_000005_create_comments_table::Migration),
            Box::new(m20260715_000006_create_favorites_table::Migration),
        ]
    }
}
