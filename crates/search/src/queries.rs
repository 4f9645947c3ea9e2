//! Queries that feed the filter controls

use pagetrail_core::{Book, BookGenre, BookStatus};
use std::collections::{HashMap, HashSet};

/// Every year that appears as an added, started, or completed year,
/// newest first
pub fn available_years(books: &[Book]) -> Vec<i32> {
    let mut years: Vec<i32> = books
        .iter()
        .flat_map(|b| [Some(b.year_added()), b.year_started(), b.year_completed()])
        .flatten()
        .collect::<HashSet<i32>>()
        .into_iter()
        .collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years
}

/// Book count per genre; genres with no books are absent
pub fn genre_distribution(books: &[Book]) -> HashMap<BookGenre, usize> {
    let mut distribution = HashMap::new();
    for book in books {
        *distribution.entry(book.genre).or_insert(0) += 1;
    }
    distribution
}

/// Book count per derived status; statuses with no books are absent
pub fn status_distribution(books: &[Book]) -> HashMap<BookStatus, usize> {
    let mut distribution = HashMap::new();
    for book in books {
        *distribution.entry(book.status()).or_insert(0) += 1;
    }
    distribution
}

/// Number of books currently in the given status
pub fn count_with_status(books: &[Book], status: BookStatus) -> usize {
    books.iter().filter(|b| b.status() == status).count()
}

/// Number of books in the given genre
pub fn count_with_genre(books: &[Book], genre: BookGenre) -> usize {
    books.iter().filter(|b| b.genre == genre).count()
}
