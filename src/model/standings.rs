//! Standings domain model.

use crate::model::dto::StandingsEntryDto;

/// One row of the pool standings: a user (with any linked offline
/// player's points folded in) or an unlinked offline player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsEntry {
    pub name: String,
    pub total_points: i64,
    pub draft_position: Option<i32>,
    /// True for unlinked offline players listed in their own right.
    pub offline: bool,
}

impl StandingsEntry {
    pub fn into_dto(self) -> StandingsEntryDto {
        StandingsEntryDto {
            name: self.name,
            total_points: self.total_points,
            draft_position: self.draft_position,
            offline: self.offline,
        }
    }
}
