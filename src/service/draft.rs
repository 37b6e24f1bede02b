//! Draft order management.
//!
//! The draft order is a single sequence shared by login users and
//! offline players, each holding a unique position in their own table.
//! Rotation moves the front picker to the back and shifts everyone
//! else up one slot.

use chrono::NaiveDate;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, TransactionTrait,
};
use tracing::info;

use crate::{
    data::{offline_player::OfflinePlayerRepository, pick::PickRepository, user::UserRepository},
    error::AppError,
    model::draft::Participant,
};

async fn set_position(
    txn: &DatabaseTransaction,
    participant: &Participant,
    position: Option<i32>,
) -> Result<(), DbErr> {
    match participant {
        Participant::User(user) => {
            entity::prelude::User::update_many()
                .filter(entity::user::Column::Id.eq(user.id))
                .col_expr(entity::user::Column::DraftPosition, Expr::value(position))
                .exec(txn)
                .await?;
        }
        Participant::Offline(player) => {
            entity::prelude::OfflinePlayer::update_many()
                .filter(entity::offline_player::Column::Id.eq(player.id))
                .col_expr(
                    entity::offline_player::Column::DraftPosition,
                    Expr::value(position),
                )
                .exec(txn)
                .await?;
        }
    }
    Ok(())
}

pub struct DraftService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DraftService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns every participant holding a draft slot, in pick order.
    ///
    /// Users and offline players are merged by position; a user wins a
    /// position tie, though positions are unique per table so ties only
    /// arise from manual edits.
    pub async fn participants(&self) -> Result<Vec<Participant>, AppError> {
        let user_repo = UserRepository::new(self.db);
        let offline_repo = OfflinePlayerRepository::new(self.db);

        let mut participants: Vec<Participant> = user_repo
            .positioned()
            .await?
            .into_iter()
            .map(Participant::User)
            .chain(
                offline_repo
                    .positioned()
                    .await?
                    .into_iter()
                    .map(Participant::Offline),
            )
            .collect();

        participants.sort_by_key(|p| {
            let offline = matches!(p, Participant::Offline(_));
            (p.draft_position(), offline)
        });

        Ok(participants)
    }

    /// Rotates the draft order: the current first picker moves to the
    /// back and everyone else shifts up one position.
    ///
    /// Returns false without touching the database when fewer than two
    /// participants hold a slot.
    pub async fn rotate(&self) -> Result<bool, AppError> {
        let participants = self.participants().await?;

        if participants.len() < 2 {
            info!(
                count = participants.len(),
                "Not enough participants to rotate draft order"
            );
            return Ok(false);
        }

        let mut order = participants;
        order.rotate_left(1);

        // The rewrite clears every slot before assigning the new order
        // (positions are unique per table), so it must be all-or-nothing:
        // a failure between the two passes would otherwise leave slots
        // NULL with nothing left to rotate.
        let txn = self.db.begin().await?;

        for participant in &order {
            set_position(&txn, participant, None).await?;
        }

        for (index, participant) in order.iter().enumerate() {
            set_position(&txn, participant, Some(index as i32 + 1)).await?;
        }

        txn.commit().await?;

        info!("Draft order rotated");

        Ok(true)
    }

    /// Returns participants who have not yet picked for the given game,
    /// in pick order.
    pub async fn unpicked_participants(
        &self,
        game_date: NaiveDate,
    ) -> Result<Vec<Participant>, AppError> {
        let pick_repo = PickRepository::new(self.db);

        let mut unpicked = Vec::new();
        for participant in self.participants().await? {
            let has_picked = match &participant {
                Participant::User(user) => {
                    pick_repo.has_pick_for_game(user.id, game_date).await?
                }
                Participant::Offline(player) => player.has_pick_for(game_date),
            };
            if !has_picked {
                unpicked.push(participant);
            }
        }

        Ok(unpicked)
    }

    /// Returns the user who should pick next for the given game.
    ///
    /// Offline players cannot be notified or log in, so they are
    /// skipped; the first login user still waiting on a pick is next.
    pub async fn next_picker(
        &self,
        game_date: NaiveDate,
    ) -> Result<Option<crate::model::user::User>, AppError> {
        let next = self
            .unpicked_participants(game_date)
            .await?
            .into_iter()
            .find_map(|p| match p {
                Participant::User(user) => Some(user),
                Participant::Offline(_) => None,
            });

        Ok(next)
    }
}
