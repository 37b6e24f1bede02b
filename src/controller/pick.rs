use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        dto::{CreatePickDto, PickDto},
        pick::CreatePickParam,
    },
    service::pick::PickService,
    state::AppState,
};

pub async fn get_picks(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let picks = PickService::new(&state.db).picks_for_user(user.id).await?;
    let dtos: Vec<PickDto> = picks.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

pub async fn create_pick(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<CreatePickDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let pick = PickService::new(&state.db)
        .create_pick(CreatePickParam {
            user_id: user.id,
            player_name: body.player_name,
            player_team: body.player_team,
            game_date: body.game_date,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(pick.into_dto())))
}
