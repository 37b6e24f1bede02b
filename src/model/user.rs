//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::dto::UserDto;

/// Notification channel a user wants their pick-turn alerts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPreference {
    Sms,
    Email,
}

impl NotificationPreference {
    /// Parses the stored string form. Anything unrecognized falls back to
    /// SMS, the default the original rows were created with.
    pub fn parse(value: &str) -> Self {
        match value {
            "email" => Self::Email,
            _ => Self::Sms,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sms => "sms",
            Self::Email => "email",
        }
    }
}

/// A pool member.
///
/// `password_hash` stays in the domain model for credential verification
/// but is never exposed through a DTO.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub notification_preference: NotificationPreference,
    pub password_hash: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    /// Slot in the draft order; None when not participating.
    pub draft_position: Option<i32>,
    /// Linked offline player whose points count toward this user's total.
    pub offline_player_id: Option<i32>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            phone: entity.phone,
            notification_preference: NotificationPreference::parse(
                &entity.notification_preference,
            ),
            password_hash: entity.password_hash,
            is_admin: entity.is_admin,
            created_at: entity.created_at,
            draft_position: entity.draft_position,
            offline_player_id: entity.offline_player_id,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            phone: self.phone,
            notification_preference: self.notification_preference.as_str().to_string(),
            is_admin: self.is_admin,
            draft_position: self.draft_position,
        }
    }
}

/// Parameters for creating a user. The password arrives already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub notification_preference: NotificationPreference,
    pub password_hash: String,
    pub is_admin: bool,
    pub draft_position: Option<i32>,
}

/// Parameters for registering a new pool member, carrying the plain
/// password. Hashing happens in the user service.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub notification_preference: NotificationPreference,
    pub password: String,
    pub is_admin: bool,
    pub draft_position: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_preferences() {
        assert_eq!(
            NotificationPreference::parse("email"),
            NotificationPreference::Email
        );
        assert_eq!(
            NotificationPreference::parse("sms"),
            NotificationPreference::Sms
        );
    }

    #[test]
    fn unknown_preference_falls_back_to_sms() {
        assert_eq!(
            NotificationPreference::parse("carrier pigeon"),
            NotificationPreference::Sms
        );
    }
}
