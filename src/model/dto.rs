//! Request and response DTOs for the JSON API.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Deserialize)]
pub struct LoginRequestDto {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub notification_preference: String,
    pub is_admin: bool,
    pub draft_position: Option<i32>,
}

#[derive(Serialize, Deserialize)]
pub struct PickDto {
    pub id: i32,
    pub player_name: String,
    pub player_team: String,
    pub game_date: DateTime<Utc>,
    pub points: i32,
    pub pick_number: Option<i32>,
}

#[derive(Deserialize)]
pub struct CreateUserDto {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// "sms" (default) or "email".
    #[serde(default)]
    pub notification_preference: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub draft_position: Option<i32>,
}

#[derive(Deserialize)]
pub struct CreatePickDto {
    pub player_name: String,
    pub player_team: String,
    pub game_date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize)]
pub struct StandingsEntryDto {
    pub name: String,
    pub total_points: i64,
    pub draft_position: Option<i32>,
    pub offline: bool,
}

#[derive(Serialize, Deserialize)]
pub struct AdminDashboardDto {
    pub users: Vec<UserDto>,
    pub settings: BTreeMap<String, String>,
}

#[derive(Serialize, Deserialize)]
pub struct PlayoffModeDto {
    pub playoff_mode: bool,
}

#[derive(Serialize, Deserialize)]
pub struct RotationDto {
    pub rotated: bool,
}

#[derive(Serialize, Deserialize)]
pub struct OfflinePlayerDto {
    pub id: i32,
    pub name: String,
    pub total_points: i32,
    pub draft_position: Option<i32>,
}

#[derive(Deserialize)]
pub struct CreateOfflinePlayerDto {
    pub name: String,
    pub draft_position: Option<i32>,
}

#[derive(Deserialize)]
pub struct LinkOfflinePlayerDto {
    pub user_id: i32,
}
