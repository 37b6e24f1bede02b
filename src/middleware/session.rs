//! Type-safe session management wrappers.
//!
//! Wraps the raw tower-sessions `Session` behind a typed interface so
//! session keys live in one place and handlers never pass string keys
//! around.

use tower_sessions::Session;

use crate::error::AppError;

pub const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Stores and retrieves the authenticated user's id and handles session
/// lifecycle operations.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's id after a successful login.
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Returns the logged-in user's id, or None when not logged in.
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        let user_id = self.session.get::<i32>(SESSION_AUTH_USER_ID).await?;
        Ok(user_id)
    }

    /// Clears all session data. Used during logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
