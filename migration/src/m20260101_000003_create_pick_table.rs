use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pick::Table)
                    .if_not_exists()
                    .col(pk_auto(Pick::Id))
                    .col(integer(Pick::UserId))
                    .col(string(Pick::PlayerName))
                    .col(string(Pick::PlayerTeam))
                    .col(timestamp_with_time_zone(Pick::GameDate))
                    .col(timestamp_with_time_zone(Pick::CreatedAt))
                    .col(integer(Pick::Points))
                    .col(integer_null(Pick::PickNumber))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pick_user_id")
                            .from(Pick::Table, Pick::UserId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pick::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Pick {
    Table,
    Id,
    UserId,
    PlayerName,
    PlayerTeam,
    GameDate,
    CreatedAt,
    Points,
    PickNumber,
}
