//! Search, filter, and sort services for pagetrail
//!
//! Pure functions over the book collection. The pipeline never mutates the
//! input: it clones the matching books into a fresh view list.

pub mod filter;
pub mod presets;
pub mod queries;

pub use filter::{filter_and_sort, sort_books};
pub use presets::{QuickFilter, FICTION_GENRES, NON_FICTION_GENRES};
pub use queries::{
    available_years, count_with_genre, count_with_status, genre_distribution, status_distribution,
};
