//! Entity factories for tests.
//!
//! Each factory creates an entity with unique defaults and lets individual
//! fields be overridden through a builder interface.

pub mod helpers;
pub mod offline_player;
pub mod pick;
pub mod setting;
pub mod user;
