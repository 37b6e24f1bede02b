use sea_orm::entity::prelude::*;

/// A single draft selection: one NHL player picked by one pool member
/// for one game.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pick")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub player_name: String,
    pub player_team: String,
    pub game_date: DateTimeUtc,
    pub created_at: DateTimeUtc,
    pub points: i32,
    /// Order of this pick within its game, assigned at insert time.
    pub pick_number: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
