use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Composite primary key = the uniqueness constraint that makes two
        // concurrent attends resolve to exactly one success.
        manager
            .create_table(
                Table::create()
                    .table(EventParticipants::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(EventParticipants::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(EventParticipants::EventId)
                            .uuid()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_event_participants")
                            .col(EventParticipants::UserId)
                            .col(EventParticipants::EventId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_participants_user_id")
                            .from(EventParticipants::Table, EventParticipants::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_participants_event_id")
                            .from(EventParticipants::Table, EventParticipants::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Roster counts per event
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_event_participants_event_id
                ON event_participants (event_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_event_participants_event_id;")
            .await?;

        manager
            .drop_table(Table::drop().table(EventParticipants::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EventParticipants {
    Table,
    UserId,
    EventId,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
}
