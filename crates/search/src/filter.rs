//! The search, filter, and sort pipeline for the library view

use chrono::NaiveDate;
use pagetrail_core::{Book, FilterSettings, SortOption};
use std::cmp::Ordering;

/// Applies the user's settings to the collection and returns the view list.
///
/// Stages run in a fixed order: search text, then status, then genre, then
/// year, then sort. Filtering by year matches a book if any of its added,
/// started, or completed years is selected.
pub fn filter_and_sort(books: &[Book], settings: &FilterSettings) -> Vec<Book> {
    let mut result: Vec<Book> = books
        .iter()
        .filter(|b| settings.search_text.is_empty() || b.matches_search(&settings.search_text))
        .filter(|b| settings.statuses.contains(&b.status()))
        .filter(|b| settings.genres.contains(&b.genre))
        .filter(|b| settings.years.is_empty() || matches_year(b, settings))
        .cloned()
        .collect();

    sort_books(&mut result, settings.sort);

    log::debug!(
        "Filtered {} of {} books (sort: {})",
        result.len(),
        books.len(),
        settings.sort
    );
    result
}

/// Sorts the slice in place. All sorts are stable, so books that compare
/// equal keep their previous relative order.
pub fn sort_books(books: &mut [Book], sort: SortOption) {
    match sort {
        SortOption::TitleAz => books.sort_by(|a, b| compare_text(&a.title, &b.title)),
        SortOption::TitleZa => books.sort_by(|a, b| compare_text(&b.title, &a.title)),
        SortOption::AuthorAz => books.sort_by(|a, b| compare_text(&a.author, &b.author)),
        SortOption::AuthorZa => books.sort_by(|a, b| compare_text(&b.author, &a.author)),
        SortOption::DateAddedNewest => books.sort_by(|a, b| b.date_added.cmp(&a.date_added)),
        SortOption::DateAddedOldest => books.sort_by(|a, b| a.date_added.cmp(&b.date_added)),
        SortOption::ProgressHigh => {
            books.sort_by(|a, b| compare_f64(b.reading_progress(), a.reading_progress()))
        }
        SortOption::ProgressLow => {
            books.sort_by(|a, b| compare_f64(a.reading_progress(), b.reading_progress()))
        }
        SortOption::PagesHigh => books.sort_by(|a, b| b.total_pages.cmp(&a.total_pages)),
        SortOption::PagesLow => books.sort_by(|a, b| a.total_pages.cmp(&b.total_pages)),
        SortOption::RecentlyRead => books.sort_by(|a, b| last_read(b).cmp(&last_read(a))),
    }
}

fn matches_year(book: &Book, settings: &FilterSettings) -> bool {
    settings.years.contains(&book.year_added())
        || book
            .year_started()
            .map_or(false, |y| settings.years.contains(&y))
        || book
            .year_completed()
            .map_or(false, |y| settings.years.contains(&y))
}

/// Case-insensitive text ordering
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Books never read sort as if last read at the oldest possible date
fn last_read(book: &Book) -> NaiveDate {
    book.last_read_date().unwrap_or(NaiveDate::MIN)
}
