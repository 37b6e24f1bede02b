use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    data::user::UserRepository,
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{
        dto::{AdminDashboardDto, CreateUserDto, PlayoffModeDto, RotationDto, UserDto},
        user::{NotificationPreference, RegisterUserParam},
    },
    service::{draft::DraftService, settings::SettingsService, user::UserService},
    state::AppState,
};

pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = UserRepository::new(&state.db).all().await?;
    let settings = SettingsService::new(&state.db).all().await?;

    let dashboard = AdminDashboardDto {
        users: users.into_iter().map(|u| u.into_dto()).collect::<Vec<UserDto>>(),
        settings,
    };

    Ok((StatusCode::OK, Json(dashboard)))
}

pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let notification_preference = body
        .notification_preference
        .as_deref()
        .map(NotificationPreference::parse)
        .unwrap_or(NotificationPreference::Sms);

    let user = UserService::new(&state.db)
        .create_user(RegisterUserParam {
            username: body.username,
            email: body.email,
            phone: body.phone,
            notification_preference,
            password: body.password,
            is_admin: body.is_admin,
            draft_position: body.draft_position,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

pub async fn toggle_playoff_mode(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let playoff_mode = SettingsService::new(&state.db).toggle_playoff_mode().await?;

    Ok((StatusCode::OK, Json(PlayoffModeDto { playoff_mode })))
}

/// Forces a draft rotation outside the poller, for manual corrections.
pub async fn rotate_draft_order(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let rotated = DraftService::new(&state.db).rotate().await?;

    Ok((StatusCode::OK, Json(RotationDto { rotated })))
}
