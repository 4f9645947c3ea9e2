//! Reading statistics view models
//!
//! These are plain data carriers. The derivation itself lives in the
//! stats crate so the models stay dependency-free.

use crate::types::Book;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregate statistics derived from the whole library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingStatistics {
    /// Books with a recorded finish date
    pub total_books_read: usize,
    /// Sum of the current page across every book
    pub total_pages_read: u32,
    /// Books started but not finished
    pub currently_reading: usize,
    /// Mean pages per logged history entry
    pub average_pages_per_day: f64,
    /// Consecutive reading days ending today or yesterday
    pub reading_streak: u32,
    /// Distinct calendar days with any logged reading
    pub total_reading_days: usize,
    /// Mean whole days between start and finish for completed books
    pub average_completion_days: f64,
    /// The current week and the seven before it, oldest first
    pub weekly_progress: Vec<WeeklyProgress>,
    /// The current month and the five before it, oldest first
    pub monthly_progress: Vec<MonthlyProgress>,
    /// Projected finish for every book with pages left
    pub finish_estimates: Vec<FinishEstimate>,
}

impl ReadingStatistics {
    /// Creates statistics with every metric zeroed
    pub fn empty() -> Self {
        Self {
            total_books_read: 0,
            total_pages_read: 0,
            currently_reading: 0,
            average_pages_per_day: 0.0,
            reading_streak: 0,
            total_reading_days: 0,
            average_completion_days: 0.0,
            weekly_progress: Vec::new(),
            monthly_progress: Vec::new(),
            finish_estimates: Vec::new(),
        }
    }
}

impl Default for ReadingStatistics {
    fn default() -> Self {
        Self::empty()
    }
}

/// Pages read and books completed within one week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyProgress {
    /// Monday of the week this bucket covers
    pub week_start: NaiveDate,
    pub pages_read: u32,
    pub books_completed: usize,
}

/// Pages read and books completed within one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyProgress {
    /// First day of the month this bucket covers
    pub month_start: NaiveDate,
    pub pages_read: u32,
    pub books_completed: usize,
}

/// Projected completion for a book still in progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinishEstimate {
    pub book: Book,
    /// Days of reading left at the book's observed pace
    pub estimated_days: u32,
    pub estimated_finish: NaiveDate,
}

impl FinishEstimate {
    /// Pages left in the estimated book
    pub fn pages_remaining(&self) -> u32 {
        self.book.pages_remaining()
    }
}

/// One day's activity summed across the library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyActivity {
    pub date: NaiveDate,
    /// Pages logged on this day across all books
    pub pages_read: u32,
    /// Number of books with an entry on this day
    pub books_active: usize,
}
