//! HTTP request handlers.
//!
//! Controllers validate access through the auth guard, convert DTOs to
//! params, call into the service layer, and convert domain models back
//! to DTOs for the response.

pub mod admin;
pub mod auth;
pub mod offline_player;
pub mod pick;
pub mod standings;
