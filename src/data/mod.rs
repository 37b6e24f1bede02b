//! Database repository layer.
//!
//! Repositories perform all database operations and convert entity models
//! to domain models at the boundary, keeping SeaORM types out of the
//! service layer.

pub mod offline_player;
pub mod pick;
pub mod setting;
pub mod user;

#[cfg(test)]
mod test;
