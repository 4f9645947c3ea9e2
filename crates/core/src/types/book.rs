//! Book domain model and reading-history rules

use crate::types::{BookGenre, BookStatus, ReadingEntry, Validator};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(Uuid);

impl BookId {
    /// Creates a new random BookId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a BookId from a UUID string
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Returns the BookId as a string
    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tracked book with its progress and reading history
///
/// Status and progress are always derived from the stored fields; nothing
/// here caches a value that could drift out of sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    /// Raw cover image bytes, stored base64-encoded on disk
    #[serde(
        rename = "coverImageData",
        with = "cover_bytes",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cover_image: Option<Vec<u8>>,
    pub current_page: u32,
    pub total_pages: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_date: Option<DateTime<Utc>>,
    /// History entries, most recent day first
    pub reading_history: Vec<ReadingEntry>,
    pub genre: BookGenre,
    pub date_added: DateTime<Utc>,
}

impl Book {
    /// Creates a new unread book with required fields
    pub fn new(title: String, author: String, total_pages: u32, genre: BookGenre) -> Self {
        Self {
            id: BookId::new(),
            title,
            author,
            cover_image: None,
            current_page: 0,
            total_pages,
            start_date: None,
            finish_date: None,
            reading_history: Vec::new(),
            genre,
            date_added: Utc::now(),
        }
    }

    /// Returns the fraction of the book read, in `[0.0, 1.0]`
    pub fn reading_progress(&self) -> f64 {
        if self.total_pages == 0 {
            return 0.0;
        }
        f64::from(self.current_page) / f64::from(self.total_pages)
    }

    /// Returns the number of pages left to read
    pub fn pages_remaining(&self) -> u32 {
        self.total_pages.saturating_sub(self.current_page)
    }

    /// Returns the derived lifecycle status
    pub fn status(&self) -> BookStatus {
        if self.finish_date.is_some() {
            BookStatus::Completed
        } else if self.current_page > 0 {
            BookStatus::Reading
        } else {
            BookStatus::Pending
        }
    }

    /// Returns the year the book was added to the library
    pub fn year_added(&self) -> i32 {
        self.date_added.year()
    }

    /// Returns the year reading started, if a start date is set
    pub fn year_started(&self) -> Option<i32> {
        self.start_date.map(|d| d.year())
    }

    /// Returns the year the book was finished, if a finish date is set
    pub fn year_completed(&self) -> Option<i32> {
        self.finish_date.map(|d| d.year())
    }

    /// Returns the most recent day with a history entry, if any
    pub fn last_read_date(&self) -> Option<NaiveDate> {
        self.reading_history.iter().map(|e| e.date).max()
    }

    /// Returns true if the title, author, or genre label contains `query`,
    /// compared case-insensitively
    pub fn matches_search(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.author.to_lowercase().contains(&needle)
            || self.genre.label().to_lowercase().contains(&needle)
    }

    /// Records reading activity for a calendar day.
    ///
    /// If the day already has an entry, `pages_read` is added to it and the
    /// page reached is overwritten; otherwise a new entry is created. The
    /// history stays sorted most recent day first.
    pub fn add_reading_entry(&mut self, date: NaiveDate, pages_read: u32, current_page: u32) {
        if let Some(entry) = self.reading_history.iter_mut().find(|e| e.date == date) {
            entry.pages_read += pages_read;
            entry.current_page = current_page;
        } else {
            self.reading_history
                .push(ReadingEntry::new(date, pages_read, current_page));
        }
        self.reading_history.sort_by(|a, b| b.date.cmp(&a.date));
    }

    /// Returns the entry logged on the given day, if any
    pub fn reading_entry_on(&self, date: NaiveDate) -> Option<&ReadingEntry> {
        self.reading_history.iter().find(|e| e.date == date)
    }
}

impl Validator for Book {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push("Title cannot be empty".to_string());
        }

        if self.author.trim().is_empty() {
            errors.push("Author cannot be empty".to_string());
        }

        if self.total_pages == 0 {
            errors.push("Total pages must be greater than zero".to_string());
        }

        if self.current_page > self.total_pages {
            errors.push(format!(
                "Current page {} exceeds total pages {}",
                self.current_page, self.total_pages
            ));
        }

        let mut days = std::collections::HashSet::new();
        for entry in &self.reading_history {
            if !days.insert(entry.date) {
                errors.push(format!("Duplicate history entry for {}", entry.date));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Serde adapter that stores cover bytes as a base64 string
mod cover_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match bytes {
            Some(data) => serializer.serialize_str(&STANDARD.encode(data)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        match encoded {
            Some(s) => STANDARD
                .decode(s.as_bytes())
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
