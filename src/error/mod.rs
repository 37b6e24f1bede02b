//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type wrapping domain-specific errors.
//! It implements `IntoResponse` so handlers can bubble errors with `?` and
//! still produce a well-formed JSON error body.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{auth::AuthError, config::ConfigError},
    model::dto::ErrorDto,
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion. `AuthError` maps
/// to its own status codes; everything else is a standard mapping.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup. Always a 500.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization failure. Delegates to
    /// `AuthError::into_response()` for 401/403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// HTTP client error from reqwest (NHL schedule API, Twilio).
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// SMTP transport error while sending a notification email.
    #[error(transparent)]
    SmtpErr(#[from] lettre::transport::smtp::Error),

    /// Email construction error.
    #[error(transparent)]
    EmailErr(#[from] lettre::error::Error),

    /// Invalid notification email address.
    #[error(transparent)]
    AddressErr(#[from] lettre::address::AddressError),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Filesystem error reading or writing the rotation state file.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// JSON error from the rotation state file or an entity ledger column.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// Resource not found. Results in 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request. Results in 400 with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal error with a custom message. The message is logged but a
    /// generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// Internal errors are logged with full details but return a generic
/// message to avoid information leakage.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error message and returns a generic body to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
