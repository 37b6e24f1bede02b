//! Opponent-change detection and draft rotation.
//!
//! The poller compares the pool team's upcoming schedule against a
//! small JSON state file. In regular season mode a new opponent means a
//! new game, so the draft order rotates; in playoff mode the same two
//! teams meet repeatedly, so the game date is compared instead. After a
//! rotation the next picker without a pick for the new game gets
//! notified.

use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::{
    error::AppError,
    nhl::{NextGame, ScheduleSource},
    notify::Notifier,
    service::{draft::DraftService, settings::SettingsService},
};

/// Last observed schedule state, persisted between poller runs.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RotationState {
    pub last_opponent: Option<String>,
    pub last_game_date: Option<String>,
}

impl RotationState {
    /// Loads the state file, or None when it does not exist yet.
    pub fn load(path: &Path) -> Result<Option<Self>, AppError> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path)?;
        let state = serde_json::from_str(&contents)?;
        Ok(Some(state))
    }

    pub fn store(&self, path: &Path) -> Result<(), AppError> {
        let contents = serde_json::to_string(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

pub struct RotationService<'a, S: ScheduleSource + ?Sized, N: Notifier + ?Sized> {
    db: &'a DatabaseConnection,
    schedule: &'a S,
    notifier: &'a N,
    state_path: PathBuf,
}

impl<'a, S: ScheduleSource + ?Sized, N: Notifier + ?Sized> RotationService<'a, S, N> {
    pub fn new(
        db: &'a DatabaseConnection,
        schedule: &'a S,
        notifier: &'a N,
        state_path: PathBuf,
    ) -> Self {
        Self {
            db,
            schedule,
            notifier,
            state_path,
        }
    }

    /// One poller pass. Returns true when the draft order rotated.
    ///
    /// The first pass after startup only seeds the state file; rotation
    /// starts from the second observation. A missing schedule is logged
    /// and skipped so transient API outages never rotate the order.
    pub async fn check_and_rotate(&self) -> Result<bool, AppError> {
        let Some(next_game) = self.schedule.next_game().await? else {
            warn!("Could not get next game information, skipping rotation check");
            return Ok(false);
        };

        let playoff_mode = SettingsService::new(self.db).playoff_mode().await?;

        let observed = if playoff_mode {
            next_game.game_time.date_naive().to_string()
        } else {
            next_game.opponent.clone()
        };

        let Some(state) = RotationState::load(&self.state_path)? else {
            self.seed_state(&next_game)?;
            return Ok(false);
        };

        let last = if playoff_mode {
            state.last_game_date.clone()
        } else {
            state.last_opponent.clone()
        };

        if last.as_deref() == Some(observed.as_str()) {
            return Ok(false);
        }

        if playoff_mode {
            info!(
                from = last.as_deref().unwrap_or("none"),
                to = %observed,
                "Game date changed (playoff mode)"
            );
        } else {
            info!(
                from = last.as_deref().unwrap_or("none"),
                to = %observed,
                "Opponent changed"
            );
        }

        let mut state = state;
        if playoff_mode {
            state.last_game_date = Some(observed);
        } else {
            state.last_opponent = Some(observed);
            state.last_game_date = Some(next_game.game_time.date_naive().to_string());
        }
        state.store(&self.state_path)?;

        let draft = DraftService::new(self.db);
        if !draft.rotate().await? {
            return Ok(false);
        }

        match draft.next_picker(next_game.game_time.date_naive()).await? {
            Some(picker) => {
                info!(username = %picker.username, "Notifying next picker after rotation");
                if let Err(e) = self
                    .notifier
                    .notify_pick_turn(&picker, next_game.game_time)
                    .await
                {
                    warn!("Failed to notify next picker: {}", e);
                }
            }
            None => {
                info!("No user awaiting a pick for the next game, skipping notification");
            }
        }

        Ok(true)
    }

    fn seed_state(&self, next_game: &NextGame) -> Result<(), AppError> {
        let state = RotationState {
            last_opponent: Some(next_game.opponent.clone()),
            last_game_date: Some(next_game.game_time.date_naive().to_string()),
        };
        state.store(&self.state_path)?;
        info!(
            opponent = %next_game.opponent,
            game_date = %next_game.game_time.date_naive(),
            "Created rotation state file"
        );
        Ok(())
    }
}
