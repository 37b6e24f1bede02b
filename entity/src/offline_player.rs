use sea_orm::entity::prelude::*;

/// A participant without a login. Their picks and per-game points are
/// kept as JSON ledgers; `total_points` is maintained separately.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "offline_player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub total_points: i32,
    /// JSON array of past picks: `[{"game_date", "player_name", "player_team"}]`.
    pub past_picks: Option<Json>,
    /// JSON map of ISO game date to points scored that game.
    pub past_game_points: Option<Json>,
    pub created_at: DateTimeUtc,
    /// Slot in the draft order. Unique among offline players; None when
    /// the player does not participate in the rotation.
    #[sea_orm(unique)]
    pub draft_position: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
