//! Background jobs.

mod rotation;

pub use rotation::start_scheduler;
