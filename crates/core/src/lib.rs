//! Core domain types for pagetrail
//!
//! Everything here is pure data and rules: no I/O, no clocks hidden in
//! derivations. Persistence lives in `pagetrail-store`, statistics in
//! `pagetrail-stats`, and the library view pipeline in `pagetrail-search`.

pub mod error;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use error::ValidationError;
pub use types::{
    Book, BookGenre, BookId, BookStatus, DailyActivity, EntryId, FilterSettings, FinishEstimate,
    MonthlyProgress, ReadingEntry, ReadingStatistics, SortOption, Validator, WeeklyProgress,
};
pub use validation::{find_duplicate, BookDraft, BookEdit, ProgressUpdate};
