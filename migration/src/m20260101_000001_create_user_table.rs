use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_uniq(User::Username))
                    .col(string_uniq(User::Email))
                    .col(string_null(User::Phone))
                    .col(string(User::NotificationPreference))
                    .col(string(User::PasswordHash))
                    .col(boolean(User::IsAdmin))
                    .col(timestamp_with_time_zone(User::CreatedAt))
                    .col(
                        ColumnDef::new(User::DraftPosition)
                            .integer()
                            .null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(User::OfflinePlayerId)
                            .integer()
                            .null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Username,
    Email,
    Phone,
    NotificationPreference,
    PasswordHash,
    IsAdmin,
    CreatedAt,
    DraftPosition,
    OfflinePlayerId,
}
