use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    error::AppError, middleware::auth::AuthGuard, model::dto::StandingsEntryDto,
    service::standings::StandingsService, state::AppState,
};

pub async fn get_standings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let standings = StandingsService::new(&state.db).standings().await?;
    let dtos: Vec<StandingsEntryDto> = standings.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
