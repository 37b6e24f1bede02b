use sea_orm::entity::prelude::*;

/// A pool member with a login, notification contact details, and an
/// optional slot in the draft order.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: Option<String>,
    /// "sms" or "email".
    pub notification_preference: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub created_at: DateTimeUtc,
    /// Slot in the draft order. Unique among users; None when the user
    /// does not participate in the rotation.
    #[sea_orm(unique)]
    pub draft_position: Option<i32>,
    /// Offline player whose points count toward this user's total.
    #[sea_orm(unique)]
    pub offline_player_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::pick::Entity")]
    Pick,
}

impl Related<super::pick::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pick.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
