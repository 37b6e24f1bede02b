//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data
//! (repository) layer. They implement pool rules, coordinate repository
//! calls, and work with domain models rather than DTOs or entity models.

pub mod auth;
pub mod draft;
pub mod pick;
pub mod rotation;
pub mod settings;
pub mod standings;
pub mod user;

#[cfg(test)]
mod test;
