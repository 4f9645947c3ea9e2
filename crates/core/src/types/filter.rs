//! Filter and sort selections for the library view

use crate::types::{BookGenre, BookStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Sort order applied to the filtered library view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOption {
    TitleAz,
    TitleZa,
    AuthorAz,
    AuthorZa,
    DateAddedNewest,
    DateAddedOldest,
    ProgressHigh,
    ProgressLow,
    PagesHigh,
    PagesLow,
    RecentlyRead,
}

impl SortOption {
    /// All sort options, in display order
    pub const ALL: [SortOption; 11] = [
        Self::TitleAz,
        Self::TitleZa,
        Self::AuthorAz,
        Self::AuthorZa,
        Self::DateAddedNewest,
        Self::DateAddedOldest,
        Self::ProgressHigh,
        Self::ProgressLow,
        Self::PagesHigh,
        Self::PagesLow,
        Self::RecentlyRead,
    ];

    /// Returns the display label for this sort order
    pub fn label(&self) -> &'static str {
        match self {
            Self::TitleAz => "Title (A-Z)",
            Self::TitleZa => "Title (Z-A)",
            Self::AuthorAz => "Author (A-Z)",
            Self::AuthorZa => "Author (Z-A)",
            Self::DateAddedNewest => "Recently Added",
            Self::DateAddedOldest => "Oldest First",
            Self::ProgressHigh => "Most Progress",
            Self::ProgressLow => "Least Progress",
            Self::PagesHigh => "Most Pages",
            Self::PagesLow => "Fewest Pages",
            Self::RecentlyRead => "Recently Read",
        }
    }
}

impl Default for SortOption {
    fn default() -> Self {
        Self::DateAddedNewest
    }
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The user's current search, filter, and sort selection
///
/// The default selects every status and every genre, so nothing is filtered
/// out until the user narrows the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSettings {
    /// Statuses to keep; books outside the set are hidden
    pub statuses: HashSet<BookStatus>,
    /// Genres to keep
    pub genres: HashSet<BookGenre>,
    /// Years to match against added, started, and completed years.
    /// Empty means no year filtering.
    pub years: HashSet<i32>,
    pub sort: SortOption,
    pub search_text: String,
}

impl FilterSettings {
    /// Returns true if any selection narrows the default view
    pub fn has_active_filters(&self) -> bool {
        self.statuses.len() != BookStatus::ALL.len()
            || self.genres.len() != BookGenre::ALL.len()
            || !self.years.is_empty()
            || !self.search_text.is_empty()
    }

    /// Restores the default selections. The sort order is left alone.
    pub fn reset(&mut self) {
        self.statuses = BookStatus::ALL.into_iter().collect();
        self.genres = BookGenre::ALL.into_iter().collect();
        self.years.clear();
        self.search_text.clear();
    }
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            statuses: BookStatus::ALL.into_iter().collect(),
            genres: BookGenre::ALL.into_iter().collect(),
            years: HashSet::new(),
            sort: SortOption::default(),
            search_text: String::new(),
        }
    }
}
