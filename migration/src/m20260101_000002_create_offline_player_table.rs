use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OfflinePlayer::Table)
                    .if_not_exists()
                    .col(pk_auto(OfflinePlayer::Id))
                    .col(string(OfflinePlayer::Name))
                    .col(integer(OfflinePlayer::TotalPoints))
                    .col(json_null(OfflinePlayer::PastPicks))
                    .col(json_null(OfflinePlayer::PastGamePoints))
                    .col(timestamp_with_time_zone(OfflinePlayer::CreatedAt))
                    .col(
                        ColumnDef::new(OfflinePlayer::DraftPosition)
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
            .drop_table(Table::drop().table(OfflinePlayer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OfflinePlayer {
    Table,
    Id,
    Name,
    TotalPoints,
    PastPicks,
    PastGamePoints,
    CreatedAt,
    DraftPosition,
}
