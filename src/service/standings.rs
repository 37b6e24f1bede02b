//! Pool standings.
//!
//! A user's total is the sum of their pick points plus the running
//! total of any offline player linked to their account. Offline players
//! without a linked user appear as their own standings rows.

use sea_orm::DatabaseConnection;
use std::collections::HashSet;

use crate::{
    data::{offline_player::OfflinePlayerRepository, pick::PickRepository, user::UserRepository},
    error::AppError,
    model::standings::StandingsEntry,
};

pub struct StandingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StandingsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes the standings, highest total first. Ties break by name
    /// so the order is stable.
    pub async fn standings(&self) -> Result<Vec<StandingsEntry>, AppError> {
        let user_repo = UserRepository::new(self.db);
        let offline_repo = OfflinePlayerRepository::new(self.db);
        let pick_repo = PickRepository::new(self.db);

        let users = user_repo.all().await?;
        let offline_players = offline_repo.all().await?;

        let linked: HashSet<i32> = users
            .iter()
            .filter_map(|u| u.offline_player_id)
            .collect();

        let mut entries = Vec::with_capacity(users.len() + offline_players.len());

        for user in &users {
            let mut total = pick_repo.total_points_for_user(user.id).await?;
            if let Some(offline_id) = user.offline_player_id {
                if let Some(player) = offline_players.iter().find(|p| p.id == offline_id) {
                    total += player.total_points as i64;
                }
            }
            entries.push(StandingsEntry {
                name: user.username.clone(),
                total_points: total,
                draft_position: user.draft_position,
                offline: false,
            });
        }

        for player in &offline_players {
            if linked.contains(&player.id) {
                continue;
            }
            entries.push(StandingsEntry {
                name: player.name.clone(),
                total_points: player.total_points as i64,
                draft_position: player.draft_position,
                offline: true,
            });
        }

        entries.sort_by(|a, b| {
            b.total_points
                .cmp(&a.total_points)
                .then_with(|| a.name.cmp(&b.name))
        });

        Ok(entries)
    }
}
