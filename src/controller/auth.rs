use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::{auth::AuthGuard, session::AuthSession},
    model::dto::LoginRequestDto,
    service::auth::AuthService,
    state::AppState,
};

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<LoginRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db);

    let user = auth_service.login(&body.username, &body.password).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
