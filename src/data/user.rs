//! User repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::user::{CreateUserParam, User};

/// Repository providing database operations for pool members.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user. The password must already be hashed.
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            email: ActiveValue::Set(param.email),
            phone: ActiveValue::Set(param.phone),
            notification_preference: ActiveValue::Set(
                param.notification_preference.as_str().to_string(),
            ),
            password_hash: ActiveValue::Set(param.password_hash),
            is_admin: ActiveValue::Set(param.is_admin),
            created_at: ActiveValue::Set(Utc::now()),
            draft_position: ActiveValue::Set(param.draft_position),
            offline_player_id: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Returns all users ordered by username.
    pub async fn all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Username)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Returns users holding a draft-order slot, lowest position first.
    pub async fn positioned(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::DraftPosition.is_not_null())
            .order_by_asc(entity::user::Column::DraftPosition)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Sets or clears a user's draft-order slot.
    ///
    /// No-op when the user does not exist. Positions are unique; callers
    /// rewriting several slots must clear before re-assigning.
    pub async fn set_draft_position(
        &self,
        user_id: i32,
        position: Option<i32>,
    ) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::DraftPosition,
                sea_orm::sea_query::Expr::value(position),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Links (or unlinks, with None) an offline player to a user, folding
    /// that player's points into the user's total.
    pub async fn set_offline_player(
        &self,
        user_id: i32,
        offline_player_id: Option<i32>,
    ) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::OfflinePlayerId,
                sea_orm::sea_query::Expr::value(offline_player_id),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Whether any admin user exists. Used for first-run seeding.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::IsAdmin.eq(true))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }
}
