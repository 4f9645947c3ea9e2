//! Book genre classification

use serde::{Deserialize, Serialize};

/// Genre assigned to a book
///
/// Serialized with camelCase keys (e.g. `"nonFiction"`) to stay compatible
/// with existing library files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BookGenre {
    Fiction,
    NonFiction,
    Mystery,
    Romance,
    ScienceFiction,
    Fantasy,
    Biography,
    History,
    SelfHelp,
    Business,
    Health,
    Travel,
    Cooking,
    Art,
    Poetry,
    Drama,
    Comedy,
    Horror,
    Adventure,
    Philosophy,
    Religion,
    Science,
    Technology,
    Other,
}

impl BookGenre {
    /// All genres, in display order
    pub const ALL: [BookGenre; 24] = [
        Self::Fiction,
        Self::NonFiction,
        Self::Mystery,
        Self::Romance,
        Self::ScienceFiction,
        Self::Fantasy,
        Self::Biography,
        Self::History,
        Self::SelfHelp,
        Self::Business,
        Self::Health,
        Self::Travel,
        Self::Cooking,
        Self::Art,
        Self::Poetry,
        Self::Drama,
        Self::Comedy,
        Self::Horror,
        Self::Adventure,
        Self::Philosophy,
        Self::Religion,
        Self::Science,
        Self::Technology,
        Self::Other,
    ];

    /// Returns the display label for this genre
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fiction => "Fiction",
            Self::NonFiction => "Non-Fiction",
            Self::Mystery => "Mystery",
            Self::Romance => "Romance",
            Self::ScienceFiction => "Science Fiction",
            Self::Fantasy => "Fantasy",
            Self::Biography => "Biography",
            Self::History => "History",
            Self::SelfHelp => "Self-Help",
            Self::Business => "Business",
            Self::Health => "Health",
            Self::Travel => "Travel",
            Self::Cooking => "Cooking",
            Self::Art => "Art",
            Self::Poetry => "Poetry",
            Self::Drama => "Drama",
            Self::Comedy => "Comedy",
            Self::Horror => "Horror",
            Self::Adventure => "Adventure",
            Self::Philosophy => "Philosophy",
            Self::Religion => "Religion",
            Self::Science => "Science",
            Self::Technology => "Technology",
            Self::Other => "Other",
        }
    }
}

impl Default for BookGenre {
    fn default() -> Self {
        Self::Other
    }
}

impl std::fmt::Display for BookGenre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
