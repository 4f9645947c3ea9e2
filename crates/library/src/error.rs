// FILE: crates/library/src/error.rs

use pagetrail_core::{BookId, ValidationError};
use pagetrail_store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Validation failed: {}", summarize(.0))]
    Invalid(Vec<ValidationError>),

    #[error("'{title}' by {author} is already in the library")]
    DuplicateBook { title: String, author: String },

    #[error("Book not found: {0}")]
    BookNotFound(BookId),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl LibraryError {
    /// Returns the field errors when this is a validation failure
    pub fn field_errors(&self) -> Option<&[ValidationError]> {
        match self {
            Self::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

// Both type aliases for convenience
pub type Result<T> = std::result::Result<T, LibraryError>;
pub type LibraryResult<T> = std::result::Result<T, LibraryError>;
