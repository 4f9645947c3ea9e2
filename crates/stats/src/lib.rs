//! Statistics derivation for pagetrail
//!
//! Pure functions from the book collection to the statistics view models
//! in `pagetrail-core`. Nothing here mutates books or touches disk.

pub mod calendar;
pub mod engine;

pub use engine::{compute, compute_at, recent_daily_activity, recent_daily_activity_at};
