//! Pick repository for database operations.
//!
//! Picks belong to a game, identified by the UTC calendar date of its
//! start time. Pick numbers are assigned per game in insertion order.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::pick::{CreatePickParam, Pick};

/// Half-open UTC datetime range covering one calendar date.
fn day_bounds(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = date.and_time(NaiveTime::MIN).and_utc();
    (start, start + Duration::days(1))
}

/// Repository providing database operations for draft picks.
pub struct PickRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PickRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a pick, assigning the next pick number for its game.
    pub async fn create(&self, param: CreatePickParam) -> Result<Pick, DbErr> {
        let game_day = param.game_date.date_naive();
        let existing = self.count_for_game(game_day).await?;

        let entity = entity::pick::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            player_name: ActiveValue::Set(param.player_name),
            player_team: ActiveValue::Set(param.player_team),
            game_date: ActiveValue::Set(param.game_date),
            created_at: ActiveValue::Set(Utc::now()),
            points: ActiveValue::Set(0),
            pick_number: ActiveValue::Set(Some(existing as i32 + 1)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Pick::from_entity(entity))
    }

    /// Returns a user's picks, most recent game first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Pick>, DbErr> {
        let entities = entity::prelude::Pick::find()
            .filter(entity::pick::Column::UserId.eq(user_id))
            .order_by_desc(entity::pick::Column::GameDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Pick::from_entity).collect())
    }

    /// Sums the points of all of a user's picks.
    pub async fn total_points_for_user(&self, user_id: i32) -> Result<i64, DbErr> {
        let entities = entity::prelude::Pick::find()
            .filter(entity::pick::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;

        Ok(entities.iter().map(|p| p.points as i64).sum())
    }

    /// Sets the points earned by one pick.
    pub async fn set_points(&self, pick_id: i32, points: i32) -> Result<(), DbErr> {
        entity::prelude::Pick::update_many()
            .filter(entity::pick::Column::Id.eq(pick_id))
            .col_expr(
                entity::pick::Column::Points,
                sea_orm::sea_query::Expr::value(points),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Whether the user already has a pick recorded for the given game.
    pub async fn has_pick_for_game(
        &self,
        user_id: i32,
        game_date: NaiveDate,
    ) -> Result<bool, DbErr> {
        let (start, end) = day_bounds(game_date);

        let count = entity::prelude::Pick::find()
            .filter(entity::pick::Column::UserId.eq(user_id))
            .filter(entity::pick::Column::GameDate.gte(start))
            .filter(entity::pick::Column::GameDate.lt(end))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Number of picks recorded across all users for the given game.
    pub async fn count_for_game(&self, game_date: NaiveDate) -> Result<u64, DbErr> {
        let (start, end) = day_bounds(game_date);

        entity::prelude::Pick::find()
            .filter(entity::pick::Column::GameDate.gte(start))
            .filter(entity::pick::Column::GameDate.lt(end))
            .count(self.db)
            .await
    }
}
