//! Domain types for pagetrail
//!
//! This module contains all domain models organized by responsibility:
//! - `book`: Book model and reading-history rules
//! - `entry`: Daily reading history entries
//! - `genre`: Genre classification
//! - `status`: Derived lifecycle status
//! - `filter`: Filter and sort selections
//! - `stats`: Statistics view models
//! - `common`: Shared traits

mod book;
mod common;
mod entry;
mod filter;
mod genre;
mod stats;
mod status;

// Re-export all public types
pub use book::{Book, BookId};
pub use common::Validator;
pub use entry::{EntryId, ReadingEntry};
pub use filter::{FilterSettings, SortOption};
pub use genre::BookGenre;
pub use stats::{
    DailyActivity, FinishEstimate, MonthlyProgress, ReadingStatistics, WeeklyProgress,
};
pub use status::BookStatus;
