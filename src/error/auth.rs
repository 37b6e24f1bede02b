use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::dto::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user in the session. Results in 401.
    #[error("No authenticated user in session")]
    NotLoggedIn,

    /// The session references a user id that no longer exists, e.g. the
    /// account was deleted while the session was still live. Results in 401.
    #[error("Session user {0} no longer exists")]
    UserNotInDatabase(i32),

    /// Username/password verification failed. Deliberately does not say
    /// which of the two was wrong. Results in 401.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The user is authenticated but lacks a required permission.
    /// Results in 403.
    ///
    /// # Fields
    /// - User id
    /// - Description of the denied operation, for server-side logs
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Maps authentication errors to HTTP responses.
///
/// Client-facing messages stay generic; the precise cause is available in
/// server logs through the `Display` impl.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotLoggedIn | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not logged in".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid username or password".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(user_id, ref reason) => {
                tracing::debug!("User {} denied access: {}", user_id, reason);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Access denied: admin privileges required".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
