//! Offline player factory for creating test participants without logins.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test offline players.
pub struct OfflinePlayerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    total_points: i32,
    past_picks: Option<serde_json::Value>,
    past_game_points: Option<serde_json::Value>,
    draft_position: Option<i32>,
}

impl<'a> OfflinePlayerFactory<'a> {
    /// Creates a factory with unique defaults: generated name, zero
    /// points, empty ledgers, no draft position.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Offline {}", id),
            total_points: 0,
            past_picks: None,
            past_game_points: None,
            draft_position: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn total_points(mut self, total_points: i32) -> Self {
        self.total_points = total_points;
        self
    }

    pub fn past_picks(mut self, past_picks: serde_json::Value) -> Self {
        self.past_picks = Some(past_picks);
        self
    }

    pub fn past_game_points(mut self, past_game_points: serde_json::Value) -> Self {
        self.past_game_points = Some(past_game_points);
        self
    }

    pub fn draft_position(mut self, position: i32) -> Self {
        self.draft_position = Some(position);
        self
    }

    /// Builds and inserts the offline player entity.
    pub async fn build(self) -> Result<entity::offline_player::Model, DbErr> {
        entity::offline_player::ActiveModel {
            name: ActiveValue::Set(self.name),
            total_points: ActiveValue::Set(self.total_points),
            past_picks: ActiveValue::Set(self.past_picks),
            past_game_points: ActiveValue::Set(self.past_game_points),
            created_at: ActiveValue::Set(Utc::now()),
            draft_position: ActiveValue::Set(self.draft_position),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an offline player with default values.
pub async fn create_offline_player(
    db: &DatabaseConnection,
) -> Result<entity::offline_player::Model, DbErr> {
    OfflinePlayerFactory::new(db).build().await
}
