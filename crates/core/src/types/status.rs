//! Book lifecycle status

use serde::{Deserialize, Serialize};

/// Lifecycle state of a book
///
/// Never stored: always derived from the current page and finish date via
/// [`Book::status`](crate::types::Book::status).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BookStatus {
    /// In the library but not started
    Pending,
    /// Started but not finished
    Reading,
    /// Finished, with a recorded finish date
    Completed,
}

impl BookStatus {
    /// All statuses, in lifecycle order
    pub const ALL: [BookStatus; 3] = [Self::Pending, Self::Reading, Self::Completed];

    /// Returns the display label for this status
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Reading => "Reading",
            Self::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_statuses_listed() {
        assert_eq!(BookStatus::ALL.len(), 3);
        assert_eq!(BookStatus::ALL[0], BookStatus::Pending);
        assert_eq!(BookStatus::ALL[2], BookStatus::Completed);
    }

    #[test]
    fn test_status_serde_keys() {
        let json = serde_json::to_string(&BookStatus::Reading).unwrap();
        assert_eq!(json, "\"reading\"");

        let parsed: BookStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(parsed, BookStatus::Completed);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(BookStatus::Pending.to_string(), "Pending");
    }
}
