use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    data::{offline_player::OfflinePlayerRepository, user::UserRepository},
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::dto::{CreateOfflinePlayerDto, LinkOfflinePlayerDto, OfflinePlayerDto},
    state::AppState,
};

pub async fn get_offline_players(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let players = OfflinePlayerRepository::new(&state.db).all().await?;
    let dtos: Vec<OfflinePlayerDto> = players.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

pub async fn create_offline_player(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<CreateOfflinePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    if body.name.trim().is_empty() {
        return Err(AppError::BadRequest("Name must not be empty".to_string()));
    }

    let player = OfflinePlayerRepository::new(&state.db)
        .create(body.name, body.draft_position)
        .await?;

    Ok((StatusCode::CREATED, Json(player.into_dto())))
}

/// Links an offline player to a user so the player's points count
/// toward that user's total.
pub async fn link_offline_player(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(body): Json<LinkOfflinePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let offline_repo = OfflinePlayerRepository::new(&state.db);
    let user_repo = UserRepository::new(&state.db);

    if offline_repo.find_by_id(id).await?.is_none() {
        return Err(AppError::NotFound("Offline player not found".to_string()));
    }
    if user_repo.find_by_id(body.user_id).await?.is_none() {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    user_repo.set_offline_player(body.user_id, Some(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}
