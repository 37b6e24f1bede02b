//! Draft-order participants.
//!
//! Registered users and offline players share one rotation, so draft logic
//! works over a combined participant type rather than two separate lists.

use crate::model::{offline_player::OfflinePlayer, user::User};

/// A holder of a draft-order slot: either a registered user or an offline
/// player.
#[derive(Debug, Clone, PartialEq)]
pub enum Participant {
    User(User),
    Offline(OfflinePlayer),
}

impl Participant {
    pub fn draft_position(&self) -> Option<i32> {
        match self {
            Self::User(u) => u.draft_position,
            Self::Offline(p) => p.draft_position,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::User(u) => &u.username,
            Self::Offline(p) => &p.name,
        }
    }
}
