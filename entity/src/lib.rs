//! SeaORM entity definitions for the pool database.

pub mod offline_player;
pub mod pick;
pub mod prelude;
pub mod setting;
pub mod user;
