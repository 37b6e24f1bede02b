//! Pool settings, including the playoff mode switch.

use sea_orm::DatabaseConnection;
use std::collections::BTreeMap;
use tracing::info;

use crate::{data::setting::SettingRepository, error::AppError};

pub const PLAYOFF_MODE_KEY: &str = "playoff_mode";

pub struct SettingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Whether playoff mode is on. The stored flag is compared without
    /// case, so hand-edited rows like "True" still count. Missing or
    /// unparseable values read as off.
    pub async fn playoff_mode(&self) -> Result<bool, AppError> {
        let setting_repo = SettingRepository::new(self.db);
        let value = setting_repo.get(PLAYOFF_MODE_KEY).await?;

        Ok(value
            .as_deref()
            .is_some_and(|v| v.eq_ignore_ascii_case("true")))
    }

    /// Flips playoff mode and returns the new state.
    pub async fn toggle_playoff_mode(&self) -> Result<bool, AppError> {
        let setting_repo = SettingRepository::new(self.db);

        let new_mode = !self.playoff_mode().await?;
        setting_repo
            .set(PLAYOFF_MODE_KEY, if new_mode { "true" } else { "false" })
            .await?;

        info!(playoff_mode = new_mode, "Playoff mode toggled");

        Ok(new_mode)
    }

    /// Returns every setting for the admin dashboard.
    pub async fn all(&self) -> Result<BTreeMap<String, String>, AppError> {
        let setting_repo = SettingRepository::new(self.db);
        let settings = setting_repo.all().await?;

        Ok(settings.into_iter().map(|s| (s.key, s.value)).collect())
    }
}
