//! User factory for creating test pool members.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .username("sarah")
///     .admin(true)
///     .draft_position(1)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    email: String,
    phone: Option<String>,
    notification_preference: String,
    password_hash: String,
    is_admin: bool,
    draft_position: Option<i32>,
    offline_player_id: Option<i32>,
}

impl<'a> UserFactory<'a> {
    /// Creates a factory with unique defaults: `user_{id}` username and
    /// email, SMS preference, no phone, not admin, no draft position.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user_{}", id),
            email: format!("user_{}@example.com", id),
            phone: None,
            notification_preference: "sms".to_string(),
            password_hash: "test-hash".to_string(),
            is_admin: false,
            draft_position: None,
            offline_player_id: None,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn notification_preference(mut self, preference: impl Into<String>) -> Self {
        self.notification_preference = preference.into();
        self
    }

    pub fn password_hash(mut self, hash: impl Into<String>) -> Self {
        self.password_hash = hash.into();
        self
    }

    pub fn admin(mut self, admin: bool) -> Self {
        self.is_admin = admin;
        self
    }

    pub fn draft_position(mut self, position: i32) -> Self {
        self.draft_position = Some(position);
        self
    }

    pub fn offline_player_id(mut self, offline_player_id: i32) -> Self {
        self.offline_player_id = Some(offline_player_id);
        self
    }

    /// Builds and inserts the user entity.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            notification_preference: ActiveValue::Set(self.notification_preference),
            password_hash: ActiveValue::Set(self.password_hash),
            is_admin: ActiveValue::Set(self.is_admin),
            created_at: ActiveValue::Set(Utc::now()),
            draft_position: ActiveValue::Set(self.draft_position),
            offline_player_id: ActiveValue::Set(self.offline_player_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user holding the given draft position.
pub async fn create_positioned_user(
    db: &DatabaseConnection,
    position: i32,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).draft_position(position).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_user_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;

        assert!(!user.username.is_empty());
        assert_eq!(user.notification_preference, "sms");
        assert!(!user.is_admin);
        assert!(user.draft_position.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_users() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user1 = create_user(db).await?;
        let user2 = create_user(db).await?;

        assert_ne!(user1.username, user2.username);
        assert_ne!(user1.email, user2.email);

        Ok(())
    }
}
