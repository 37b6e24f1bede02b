//! Pick recording and retrieval.

use sea_orm::DatabaseConnection;

use crate::{
    data::pick::PickRepository,
    error::AppError,
    model::pick::{CreatePickParam, Pick},
};

pub struct PickService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PickService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a pick for a game. One pick per user per game.
    pub async fn create_pick(&self, param: CreatePickParam) -> Result<Pick, AppError> {
        let pick_repo = PickRepository::new(self.db);

        let game_day = param.game_date.date_naive();
        if pick_repo.has_pick_for_game(param.user_id, game_day).await? {
            return Err(AppError::BadRequest(
                "You already have a pick for this game".to_string(),
            ));
        }

        let pick = pick_repo.create(param).await?;
        Ok(pick)
    }

    /// Returns a user's picks, most recent game first.
    pub async fn picks_for_user(&self, user_id: i32) -> Result<Vec<Pick>, AppError> {
        let pick_repo = PickRepository::new(self.db);
        let picks = pick_repo.get_by_user(user_id).await?;
        Ok(picks)
    }
}
