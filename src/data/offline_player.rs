//! Offline player repository for database operations.
//!
//! The JSON ledger columns are parsed into typed collections here, at the
//! repository boundary; malformed ledger data surfaces as an error.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::collections::BTreeMap;

use crate::{
    error::AppError,
    model::offline_player::{OfflinePlayer, PastPick},
};

/// Repository providing database operations for offline players.
pub struct OfflinePlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OfflinePlayerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: String,
        draft_position: Option<i32>,
    ) -> Result<OfflinePlayer, AppError> {
        let entity = entity::offline_player::ActiveModel {
            name: ActiveValue::Set(name),
            total_points: ActiveValue::Set(0),
            past_picks: ActiveValue::Set(None),
            past_game_points: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            draft_position: ActiveValue::Set(draft_position),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        OfflinePlayer::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<OfflinePlayer>, AppError> {
        let entity = entity::prelude::OfflinePlayer::find_by_id(id)
            .one(self.db)
            .await?;

        entity.map(OfflinePlayer::from_entity).transpose()
    }

    /// Returns all offline players ordered by name.
    pub async fn all(&self) -> Result<Vec<OfflinePlayer>, AppError> {
        let entities = entity::prelude::OfflinePlayer::find()
            .order_by_asc(entity::offline_player::Column::Name)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(OfflinePlayer::from_entity)
            .collect()
    }

    /// Returns offline players holding a draft-order slot, lowest first.
    pub async fn positioned(&self) -> Result<Vec<OfflinePlayer>, AppError> {
        let entities = entity::prelude::OfflinePlayer::find()
            .filter(entity::offline_player::Column::DraftPosition.is_not_null())
            .order_by_asc(entity::offline_player::Column::DraftPosition)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(OfflinePlayer::from_entity)
            .collect()
    }

    /// Sets or clears an offline player's draft-order slot.
    pub async fn set_draft_position(
        &self,
        id: i32,
        position: Option<i32>,
    ) -> Result<(), DbErr> {
        entity::prelude::OfflinePlayer::update_many()
            .filter(entity::offline_player::Column::Id.eq(id))
            .col_expr(
                entity::offline_player::Column::DraftPosition,
                sea_orm::sea_query::Expr::value(position),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Appends an entry to the player's past-picks ledger.
    pub async fn add_pick(&self, id: i32, pick: PastPick) -> Result<(), AppError> {
        let entity = self.find_entity(id).await?;

        let mut picks: Vec<PastPick> = match &entity.past_picks {
            Some(value) => serde_json::from_value(value.clone())?,
            None => Vec::new(),
        };
        picks.push(pick);

        let mut active: entity::offline_player::ActiveModel = entity.into();
        active.past_picks = ActiveValue::Set(Some(serde_json::to_value(&picks)?));
        active.update(self.db).await?;

        Ok(())
    }

    /// Records the points an offline player scored in one game.
    ///
    /// Updates only the per-game ledger; `total_points` is maintained
    /// separately via `set_total_points`.
    pub async fn set_game_points(
        &self,
        id: i32,
        game_date: NaiveDate,
        points: i32,
    ) -> Result<(), AppError> {
        let entity = self.find_entity(id).await?;

        let mut ledger: BTreeMap<NaiveDate, i32> = match &entity.past_game_points {
            Some(value) => serde_json::from_value(value.clone())?,
            None => BTreeMap::new(),
        };
        ledger.insert(game_date, points);

        let mut active: entity::offline_player::ActiveModel = entity.into();
        active.past_game_points = ActiveValue::Set(Some(serde_json::to_value(&ledger)?));
        active.update(self.db).await?;

        Ok(())
    }

    /// Sets the player's running total.
    pub async fn set_total_points(&self, id: i32, total_points: i32) -> Result<(), DbErr> {
        entity::prelude::OfflinePlayer::update_many()
            .filter(entity::offline_player::Column::Id.eq(id))
            .col_expr(
                entity::offline_player::Column::TotalPoints,
                sea_orm::sea_query::Expr::value(total_points),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    async fn find_entity(&self, id: i32) -> Result<entity::offline_player::Model, AppError> {
        entity::prelude::OfflinePlayer::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Offline player not found".to_string()))
    }
}
