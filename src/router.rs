use axum::{
    routing::{get, post, put},
    Router,
};

use crate::{
    controller::{admin, auth, offline_player, pick, standings},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/standings", get(standings::get_standings))
        .route("/api/picks", get(pick::get_picks).post(pick::create_pick))
        .route("/api/admin/dashboard", get(admin::get_dashboard))
        .route("/api/admin/users", post(admin::create_user))
        .route("/api/admin/playoff-mode", post(admin::toggle_playoff_mode))
        .route("/api/admin/rotate", post(admin::rotate_draft_order))
        .route(
            "/api/admin/offline-players",
            get(offline_player::get_offline_players).post(offline_player::create_offline_player),
        )
        .route(
            "/api/admin/offline-players/{id}/link",
            put(offline_player::link_offline_player),
        )
}
