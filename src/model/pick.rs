//! Pick domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::dto::PickDto;

/// A draft selection tied to a user, player, team, and game.
#[derive(Debug, Clone, PartialEq)]
pub struct Pick {
    pub id: i32,
    pub user_id: i32,
    pub player_name: String,
    pub player_team: String,
    pub game_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub points: i32,
    /// Order of this pick within its game.
    pub pick_number: Option<i32>,
}

impl Pick {
    pub fn from_entity(entity: entity::pick::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            player_name: entity.player_name,
            player_team: entity.player_team,
            game_date: entity.game_date,
            created_at: entity.created_at,
            points: entity.points,
            pick_number: entity.pick_number,
        }
    }

    pub fn into_dto(self) -> PickDto {
        PickDto {
            id: self.id,
            player_name: self.player_name,
            player_team: self.player_team,
            game_date: self.game_date,
            points: self.points,
            pick_number: self.pick_number,
        }
    }
}

/// Parameters for recording a pick. The pick number is assigned by the
/// repository from the count of picks already recorded for the game.
#[derive(Debug, Clone)]
pub struct CreatePickParam {
    pub user_id: i32,
    pub player_name: String,
    pub player_team: String,
    pub game_date: DateTime<Utc>,
}
