//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository
//! boundary and to DTOs at the controller boundary, keeping business logic
//! independent of database and API shapes.

pub mod draft;
pub mod dto;
pub mod offline_player;
pub mod pick;
pub mod setting;
pub mod standings;
pub mod user;
