//! Pick factory for creating test draft selections.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test picks tied to an existing user.
pub struct PickFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    player_name: String,
    player_team: String,
    game_date: DateTime<Utc>,
    points: i32,
    pick_number: Option<i32>,
}

impl<'a> PickFactory<'a> {
    /// Creates a factory with unique defaults: generated player name,
    /// team "TOR", game date now, zero points.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            player_name: format!("Player {}", id),
            player_team: "TOR".to_string(),
            game_date: Utc::now(),
            points: 0,
            pick_number: None,
        }
    }

    pub fn player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    pub fn player_team(mut self, team: impl Into<String>) -> Self {
        self.player_team = team.into();
        self
    }

    pub fn game_date(mut self, game_date: DateTime<Utc>) -> Self {
        self.game_date = game_date;
        self
    }

    pub fn points(mut self, points: i32) -> Self {
        self.points = points;
        self
    }

    pub fn pick_number(mut self, pick_number: i32) -> Self {
        self.pick_number = Some(pick_number);
        self
    }

    /// Builds and inserts the pick entity.
    pub async fn build(self) -> Result<entity::pick::Model, DbErr> {
        entity::pick::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            player_name: ActiveValue::Set(self.player_name),
            player_team: ActiveValue::Set(self.player_team),
            game_date: ActiveValue::Set(self.game_date),
            created_at: ActiveValue::Set(Utc::now()),
            points: ActiveValue::Set(self.points),
            pick_number: ActiveValue::Set(self.pick_number),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pick for the given user with default values.
pub async fn create_pick(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::pick::Model, DbErr> {
    PickFactory::new(db, user_id).build().await
}
