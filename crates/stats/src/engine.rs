//! Statistics derivation over the book collection
//!
//! Every metric is recomputed from scratch on each call; nothing is cached
//! between snapshots. The `_at` variants take an explicit "today" so
//! snapshots are reproducible.

use crate::calendar;
use chrono::{Duration, NaiveDate, Utc};
use pagetrail_core::{
    Book, DailyActivity, FinishEstimate, MonthlyProgress, ReadingStatistics, WeeklyProgress,
};
use std::collections::HashSet;

/// Pages per day assumed for a book with no logged history
const FALLBACK_PACE: u32 = 20;

/// Number of weekly buckets, current week included
const WEEKS_TRACKED: u32 = 8;

/// Number of monthly buckets, current month included
const MONTHS_TRACKED: u32 = 6;

/// Derives the full statistics snapshot as of today
pub fn compute(books: &[Book]) -> ReadingStatistics {
    compute_at(books, Utc::now().date_naive())
}

/// Derives the full statistics snapshot as of the given day
pub fn compute_at(books: &[Book], today: NaiveDate) -> ReadingStatistics {
    let stats = ReadingStatistics {
        total_books_read: books.iter().filter(|b| b.finish_date.is_some()).count(),
        total_pages_read: books.iter().map(|b| b.current_page).sum(),
        currently_reading: books
            .iter()
            .filter(|b| b.finish_date.is_none() && b.current_page > 0)
            .count(),
        average_pages_per_day: average_pages_per_day(books),
        reading_streak: reading_streak(books, today),
        total_reading_days: reading_days(books).len(),
        average_completion_days: average_completion_days(books),
        weekly_progress: weekly_progress(books, today),
        monthly_progress: monthly_progress(books, today),
        finish_estimates: finish_estimates(books, today),
    };

    log::debug!(
        "Computed statistics for {} books: {} read, {} in progress, streak {}",
        books.len(),
        stats.total_books_read,
        stats.currently_reading,
        stats.reading_streak
    );

    stats
}

/// Per-day activity for the trailing `days` days ending today, oldest first
pub fn recent_daily_activity(books: &[Book], days: u32) -> Vec<DailyActivity> {
    recent_daily_activity_at(books, days, Utc::now().date_naive())
}

/// Per-day activity for the trailing `days` days ending at `today`,
/// oldest first. Days without entries appear with zeroes.
pub fn recent_daily_activity_at(books: &[Book], days: u32, today: NaiveDate) -> Vec<DailyActivity> {
    let mut activity = Vec::with_capacity(days as usize);
    for offset in (0..days).rev() {
        let date = today - Duration::days(i64::from(offset));
        let mut pages_read = 0;
        let mut books_active = 0;
        for book in books {
            if let Some(entry) = book.reading_entry_on(date) {
                pages_read += entry.pages_read;
                books_active += 1;
            }
        }
        activity.push(DailyActivity {
            date,
            pages_read,
            books_active,
        });
    }
    activity
}

/// Mean pages per history entry across every book.
///
/// The divisor is the entry count, not the distinct-day count: the same
/// calendar day logged in two books contributes twice.
fn average_pages_per_day(books: &[Book]) -> f64 {
    let mut entries = 0usize;
    let mut pages = 0u64;
    for book in books {
        for entry in &book.reading_history {
            entries += 1;
            pages += u64::from(entry.pages_read);
        }
    }
    if entries == 0 {
        return 0.0;
    }
    pages as f64 / entries as f64
}

/// Distinct calendar days with at least one entry in any book
fn reading_days(books: &[Book]) -> HashSet<NaiveDate> {
    books
        .iter()
        .flat_map(|b| b.reading_history.iter().map(|e| e.date))
        .collect()
}

/// Length of the consecutive-day run ending at `today`, or at yesterday
/// when today has no entry yet. A gap before yesterday means zero.
fn reading_streak(books: &[Book], today: NaiveDate) -> u32 {
    let days = reading_days(books);
    if days.is_empty() {
        return 0;
    }

    let yesterday = today - Duration::days(1);
    let anchor = if days.contains(&today) {
        today
    } else if days.contains(&yesterday) {
        yesterday
    } else {
        return 0;
    };

    let mut streak = 1;
    let mut cursor = anchor - Duration::days(1);
    while days.contains(&cursor) {
        streak += 1;
        cursor = cursor - Duration::days(1);
    }
    streak
}

/// Mean whole days from start to finish over books that have both dates
fn average_completion_days(books: &[Book]) -> f64 {
    let spans: Vec<i64> = books
        .iter()
        .filter_map(|b| match (b.start_date, b.finish_date) {
            (Some(start), Some(finish)) => Some((finish - start).num_days()),
            _ => None,
        })
        .collect();

    if spans.is_empty() {
        return 0.0;
    }
    spans.iter().sum::<i64>() as f64 / spans.len() as f64
}

/// Buckets for the current week and the seven before it, oldest first.
/// Weeks run Monday through Sunday.
fn weekly_progress(books: &[Book], today: NaiveDate) -> Vec<WeeklyProgress> {
    let mut weeks = Vec::with_capacity(WEEKS_TRACKED as usize);
    for offset in (0..WEEKS_TRACKED).rev() {
        let start = calendar::weeks_back(today, offset);
        let end = start + Duration::days(6);

        let pages_read = books
            .iter()
            .flat_map(|b| &b.reading_history)
            .filter(|e| e.date >= start && e.date <= end)
            .map(|e| e.pages_read)
            .sum();

        let books_completed = books
            .iter()
            .filter(|b| {
                b.finish_date.map_or(false, |f| {
                    let day = f.date_naive();
                    day >= start && day <= end
                })
            })
            .count();

        weeks.push(WeeklyProgress {
            week_start: start,
            pages_read,
            books_completed,
        });
    }
    weeks
}

/// Buckets for the current month and the five before it, oldest first
fn monthly_progress(books: &[Book], today: NaiveDate) -> Vec<MonthlyProgress> {
    let mut months = Vec::with_capacity(MONTHS_TRACKED as usize);
    for offset in (0..MONTHS_TRACKED).rev() {
        let start = calendar::months_back(today, offset);
        let end = calendar::next_month_start(start);

        let pages_read = books
            .iter()
            .flat_map(|b| &b.reading_history)
            .filter(|e| e.date >= start && e.date < end)
            .map(|e| e.pages_read)
            .sum();

        let books_completed = books
            .iter()
            .filter(|b| {
                b.finish_date.map_or(false, |f| {
                    let day = f.date_naive();
                    day >= start && day < end
                })
            })
            .count();

        months.push(MonthlyProgress {
            month_start: start,
            pages_read,
            books_completed,
        });
    }
    months
}

/// Projects a finish date for every book with pages left.
///
/// Books with history use their observed pace, clamped to at least one page
/// per day, rounded up to whole days. Books without history assume
/// [`FALLBACK_PACE`] pages per day, rounded down.
fn finish_estimates(books: &[Book], today: NaiveDate) -> Vec<FinishEstimate> {
    books
        .iter()
        .filter(|b| b.pages_remaining() > 0)
        .map(|book| {
            let remaining = book.pages_remaining();
            let estimated_days = if book.reading_history.is_empty() {
                remaining / FALLBACK_PACE
            } else {
                let pages: u64 = book
                    .reading_history
                    .iter()
                    .map(|e| u64::from(e.pages_read))
                    .sum();
                let pace = pages as f64 / book.reading_history.len() as f64;
                (f64::from(remaining) / pace.max(1.0)).ceil() as u32
            };

            FinishEstimate {
                book: book.clone(),
                estimated_days,
                estimated_finish: today + Duration::days(i64::from(estimated_days)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagetrail_core::BookGenre;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn book(title: &str, total_pages: u32) -> Book {
        Book::new(
            title.to_string(),
            "Author".to_string(),
            total_pages,
            BookGenre::Fiction,
        )
    }

    #[test]
    fn test_average_pages_per_day_counts_entries_not_days() {
        let mut a = book("A", 300);
        let mut b = book("B", 300);
        // Same calendar day in two books: two entries, divisor 2
        a.add_reading_entry(day(2025, 3, 10), 30, 30);
        b.add_reading_entry(day(2025, 3, 10), 10, 10);

        assert_eq!(average_pages_per_day(&[a, b]), 20.0);
    }

    #[test]
    fn test_streak_with_entry_today() {
        let mut a = book("A", 300);
        a.add_reading_entry(day(2025, 3, 12), 10, 10);
        a.add_reading_entry(day(2025, 3, 13), 10, 20);
        a.add_reading_entry(day(2025, 3, 14), 10, 30);

        assert_eq!(reading_streak(&[a], day(2025, 3, 14)), 3);
    }

    #[test]
    fn test_streak_grace_for_yesterday() {
        let mut a = book("A", 300);
        a.add_reading_entry(day(2025, 3, 12), 10, 10);
        a.add_reading_entry(day(2025, 3, 13), 10, 20);

        // No entry today: the streak ending yesterday still counts
        assert_eq!(reading_streak(&[a], day(2025, 3, 14)), 2);
    }

    #[test]
    fn test_streak_broken_before_yesterday() {
        let mut a = book("A", 300);
        a.add_reading_entry(day(2025, 3, 10), 10, 10);
        a.add_reading_entry(day(2025, 3, 11), 10, 20);

        assert_eq!(reading_streak(&[a], day(2025, 3, 14)), 0);

        // Two days ago is already too old to anchor a streak
        let mut b = book("B", 300);
        b.add_reading_entry(day(2025, 3, 12), 10, 10);
        assert_eq!(reading_streak(&[b], day(2025, 3, 14)), 0);
    }

    #[test]
    fn test_streak_spans_books() {
        let mut a = book("A", 300);
        let mut b = book("B", 300);
        a.add_reading_entry(day(2025, 3, 13), 10, 10);
        b.add_reading_entry(day(2025, 3, 14), 10, 10);

        assert_eq!(reading_streak(&[a, b], day(2025, 3, 14)), 2);
    }

    #[test]
    fn test_completion_days_average() {
        let mut a = book("A", 100);
        a.start_date = Some(day(2025, 1, 1).and_time(chrono::NaiveTime::MIN).and_utc());
        a.finish_date = Some(day(2025, 1, 11).and_time(chrono::NaiveTime::MIN).and_utc());

        let mut b = book("B", 100);
        b.start_date = Some(day(2025, 2, 1).and_time(chrono::NaiveTime::MIN).and_utc());
        b.finish_date = Some(day(2025, 2, 21).and_time(chrono::NaiveTime::MIN).and_utc());

        // Books missing either date are excluded from the average
        let c = book("C", 100);

        assert_eq!(average_completion_days(&[a, b, c]), 15.0);
    }

    #[test]
    fn test_estimate_uses_observed_pace() {
        let mut a = book("A", 100);
        a.add_reading_entry(day(2025, 3, 10), 10, 10);
        a.add_reading_entry(day(2025, 3, 11), 20, 30);
        // Pace 15 pages/entry, 70 left: ceil(70 / 15) = 5 days
        a.current_page = 30;

        let estimates = finish_estimates(&[a], day(2025, 3, 12));
        assert_eq!(estimates.len(), 1);
        assert_eq!(estimates[0].estimated_days, 5);
        assert_eq!(estimates[0].estimated_finish, day(2025, 3, 17));
    }

    #[test]
    fn test_estimate_fallback_pace_rounds_down() {
        let mut a = book("A", 110);
        a.current_page = 0;
        // 110 left at 20/day: 5 whole days
        let estimates = finish_estimates(&[a], day(2025, 3, 12));
        assert_eq!(estimates[0].estimated_days, 5);
    }

    #[test]
    fn test_estimate_skips_finished_books() {
        let mut a = book("A", 100);
        a.current_page = 100;
        let b = book("B", 100);

        let estimates = finish_estimates(&[a, b], day(2025, 3, 12));
        assert_eq!(estimates.len(), 1);
        assert_eq!(estimates[0].book.title, "B");
    }

    #[test]
    fn test_estimate_clamps_tiny_pace() {
        let mut a = book("A", 100);
        // Pace below one page per day is clamped to one
        a.reading_history
            .push(pagetrail_core::ReadingEntry::new(day(2025, 3, 10), 0, 0));

        let estimates = finish_estimates(&[a], day(2025, 3, 12));
        assert_eq!(estimates[0].estimated_days, 100);
    }

    #[test]
    fn test_weekly_buckets_oldest_first() {
        let today = day(2025, 3, 14);
        let buckets = weekly_progress(&[], today);

        assert_eq!(buckets.len(), 8);
        assert_eq!(buckets[7].week_start, day(2025, 3, 10));
        assert_eq!(buckets[0].week_start, day(2025, 1, 20));
        for pair in buckets.windows(2) {
            assert!(pair[0].week_start < pair[1].week_start);
        }
    }

    #[test]
    fn test_monthly_buckets_oldest_first() {
        let today = day(2025, 3, 14);
        let buckets = monthly_progress(&[], today);

        assert_eq!(buckets.len(), 6);
        assert_eq!(buckets[5].month_start, day(2025, 3, 1));
        assert_eq!(buckets[0].month_start, day(2024, 10, 1));
    }

    #[test]
    fn test_weekly_pages_and_completions_fall_in_right_bucket() {
        let today = day(2025, 3, 14);
        let mut a = book("A", 100);
        a.add_reading_entry(day(2025, 3, 12), 40, 40);
        // Previous week
        a.add_reading_entry(day(2025, 3, 5), 10, 10);
        a.finish_date = Some(day(2025, 3, 12).and_time(chrono::NaiveTime::MIN).and_utc());

        let buckets = weekly_progress(&[a], today);
        assert_eq!(buckets[7].pages_read, 40);
        assert_eq!(buckets[7].books_completed, 1);
        assert_eq!(buckets[6].pages_read, 10);
        assert_eq!(buckets[6].books_completed, 0);
    }

    #[test]
    fn test_monthly_boundaries_are_exclusive_of_next_month() {
        let today = day(2025, 3, 14);
        let mut a = book("A", 100);
        a.add_reading_entry(day(2025, 2, 28), 10, 10);
        a.add_reading_entry(day(2025, 3, 1), 20, 30);

        let buckets = monthly_progress(&[a], today);
        assert_eq!(buckets[4].pages_read, 10);
        assert_eq!(buckets[5].pages_read, 20);
    }
}
