use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No status column on purpose: membership in this table IS the
        // pending state. Approve copies the row into events and deletes it
        // here in one transaction; reject just deletes it.
        manager
            .create_table(
                Table::create()
                    .table(EventsOnReview::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EventsOnReview::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(EventsOnReview::Title)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(EventsOnReview::Description).text().not_null())
                    .col(
                        ColumnDef::new(EventsOnReview::EventDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EventsOnReview::Category)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(ColumnDef::new(EventsOnReview::CreatorId).uuid().not_null())
                    .col(
                        ColumnDef::new(EventsOnReview::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_events_on_review_creator_id")
                            .from(EventsOnReview::Table, EventsOnReview::CreatorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_events_on_review_creator_id
                ON events_on_review (creator_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_events_on_review_creator_id;")
            .await?;

        manager
            .drop_table(Table::drop().table(EventsOnReview::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EventsOnReview {
    Table,
    Id,
    Title,
    Description,
    EventDate,
    Category,
    CreatorId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
