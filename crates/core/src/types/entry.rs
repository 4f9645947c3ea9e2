//! Daily reading history entries

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a reading entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Creates a new random EntryId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an EntryId from a UUID string
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Returns the EntryId as a string
    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One calendar day of logged reading for a book
///
/// A book holds at most one entry per calendar day; logging the same day
/// again merges into the existing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingEntry {
    pub id: EntryId,
    /// Calendar day this entry belongs to
    pub date: NaiveDate,
    /// Pages read during that day, accumulated across same-day logs
    pub pages_read: u32,
    /// Page reached as of that day's last log
    pub current_page: u32,
}

impl ReadingEntry {
    /// Creates a new entry for the given day
    pub fn new(date: NaiveDate, pages_read: u32, current_page: u32) -> Self {
        Self {
            id: EntryId::new(),
            date,
            pages_read,
            current_page,
        }
    }
}
