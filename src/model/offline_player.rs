//! Offline player domain models.
//!
//! Offline players have no login; their picks and per-game points are kept
//! as JSON ledgers on the row and parsed into typed collections at the
//! repository boundary.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, model::dto::OfflinePlayerDto};

/// One entry in an offline player's past-picks ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastPick {
    pub game_date: NaiveDate,
    pub player_name: String,
    pub player_team: String,
}

/// A participant without a login, tracked alongside registered users.
#[derive(Debug, Clone, PartialEq)]
pub struct OfflinePlayer {
    pub id: i32,
    pub name: String,
    /// Running total, maintained explicitly rather than derived from the
    /// per-game ledger.
    pub total_points: i32,
    pub past_picks: Vec<PastPick>,
    /// Points scored per game date.
    pub past_game_points: BTreeMap<NaiveDate, i32>,
    pub created_at: DateTime<Utc>,
    /// Slot in the draft order; None when not participating.
    pub draft_position: Option<i32>,
}

impl OfflinePlayer {
    /// Converts an entity model, parsing the JSON ledger columns.
    ///
    /// A NULL ledger column becomes an empty collection; malformed JSON is
    /// an error rather than silently dropped data.
    pub fn from_entity(entity: entity::offline_player::Model) -> Result<Self, AppError> {
        let past_picks = match entity.past_picks {
            Some(value) => serde_json::from_value(value)?,
            None => Vec::new(),
        };
        let past_game_points = match entity.past_game_points {
            Some(value) => serde_json::from_value(value)?,
            None => BTreeMap::new(),
        };

        Ok(Self {
            id: entity.id,
            name: entity.name,
            total_points: entity.total_points,
            past_picks,
            past_game_points,
            created_at: entity.created_at,
            draft_position: entity.draft_position,
        })
    }

    /// Whether the player already has a pick recorded for the given game.
    pub fn has_pick_for(&self, game_date: NaiveDate) -> bool {
        self.past_picks.iter().any(|p| p.game_date == game_date)
    }

    pub fn into_dto(self) -> OfflinePlayerDto {
        OfflinePlayerDto {
            id: self.id,
            name: self.name,
            total_points: self.total_points,
            draft_position: self.draft_position,
        }
    }
}
