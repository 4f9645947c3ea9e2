//! One-tap filter presets

use chrono::{Datelike, Utc};
use pagetrail_core::{BookGenre, BookStatus, FilterSettings};

/// Genres grouped under the Fiction preset
pub const FICTION_GENRES: [BookGenre; 5] = [
    BookGenre::Fiction,
    BookGenre::Fantasy,
    BookGenre::ScienceFiction,
    BookGenre::Mystery,
    BookGenre::Romance,
];

/// Genres grouped under the Non-Fiction preset
pub const NON_FICTION_GENRES: [BookGenre; 6] = [
    BookGenre::NonFiction,
    BookGenre::Biography,
    BookGenre::History,
    BookGenre::SelfHelp,
    BookGenre::Business,
    BookGenre::Science,
];

/// Named filter recipes shown above the library list.
///
/// Each preset overwrites only the selections that define it; the rest of
/// the settings, the sort order included, are left as they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickFilter {
    ReadingNow,
    FinishedThisYear,
    Pending,
    Fiction,
    NonFiction,
}

impl QuickFilter {
    /// All presets, in display order
    pub const ALL: [QuickFilter; 5] = [
        Self::ReadingNow,
        Self::FinishedThisYear,
        Self::Pending,
        Self::Fiction,
        Self::NonFiction,
    ];

    /// Returns the display label for this preset
    pub fn label(&self) -> &'static str {
        match self {
            Self::ReadingNow => "Reading Now",
            Self::FinishedThisYear => "Finished This Year",
            Self::Pending => "Pending",
            Self::Fiction => "Fiction",
            Self::NonFiction => "Non-Fiction",
        }
    }

    /// Applies this preset's recipe to the settings
    pub fn apply(&self, settings: &mut FilterSettings) {
        self.apply_with_year(settings, Utc::now().year());
    }

    /// Applies the recipe with an explicit "this year"
    pub fn apply_with_year(&self, settings: &mut FilterSettings, current_year: i32) {
        match self {
            Self::ReadingNow => {
                settings.statuses = [BookStatus::Reading].into_iter().collect();
                settings.genres = BookGenre::ALL.into_iter().collect();
            }
            Self::FinishedThisYear => {
                settings.statuses = [BookStatus::Completed].into_iter().collect();
                settings.years = [current_year].into_iter().collect();
            }
            Self::Pending => {
                settings.statuses = [BookStatus::Pending].into_iter().collect();
                settings.genres = BookGenre::ALL.into_iter().collect();
            }
            Self::Fiction => {
                settings.genres = FICTION_GENRES.into_iter().collect();
                settings.statuses = BookStatus::ALL.into_iter().collect();
            }
            Self::NonFiction => {
                settings.genres = NON_FICTION_GENRES.into_iter().collect();
                settings.statuses = BookStatus::ALL.into_iter().collect();
            }
        }
    }
}

impl std::fmt::Display for QuickFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
