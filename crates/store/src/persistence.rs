//! File system persistence for the book collection
//!
//! This module handles reading and writing the library file with:
//! - Atomic writes (no partial/corrupted files)
//! - Automatic backups before overwrites
//! - Directory creation
//! - NO PANICS - all errors are handled via Result types

use crate::error::{StoreError, StoreResult};
use pagetrail_core::{Book, Validator};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Handles library file persistence
pub struct StorePersistence {
    data_path: PathBuf,
}

impl StorePersistence {
    /// Creates a new persistence handler for the given library file path
    pub fn new(data_path: PathBuf) -> Self {
        Self { data_path }
    }

    /// Returns the library file path
    pub fn path(&self) -> &Path {
        &self.data_path
    }

    /// Loads the book collection from file
    ///
    /// If the file doesn't exist, returns an empty collection.
    /// If the file is empty or corrupted, returns an error.
    pub fn load(&self) -> StoreResult<Vec<Book>> {
        if !self.data_path.exists() {
            log::info!(
                "Library file not found at {}, starting empty",
                self.data_path.display()
            );
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.data_path).map_err(|e| StoreError::ReadError {
            path: self.data_path.clone(),
            source: e,
        })?;

        // An empty or whitespace-only file is corrupted, not a valid
        // empty library (that would be "[]")
        if contents.trim().is_empty() {
            return Err(StoreError::ReadError {
                path: self.data_path.clone(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "Library file is empty or contains only whitespace",
                ),
            });
        }

        let books: Vec<Book> =
            serde_json::from_str(&contents).map_err(|e| StoreError::ParseError {
                path: self.data_path.clone(),
                source: e,
            })?;

        // Warn about inconsistent books but keep them; losing data over a
        // bad field would be worse
        for book in &books {
            if let Err(errors) = book.validate() {
                log::warn!(
                    "Book '{}' loaded with validation warnings: {}",
                    book.title,
                    errors.join("; ")
                );
            }
        }

        Ok(books)
    }

    /// Saves the book collection to file atomically
    ///
    /// This uses a temporary file and atomic rename so the library file is
    /// never left in a corrupted state.
    pub fn save(&self, books: &[Book]) -> StoreResult<()> {
        // Ensure data directory exists
        if let Some(parent) = self.data_path.parent() {
            self.ensure_directory_exists(parent)?;
        }

        // Backup existing library if it exists
        if self.data_path.exists() {
            self.backup_library()?;
        }

        let json = serde_json::to_string_pretty(books)?;

        // Write to temporary file first
        let temp_file = self.create_temp_file()?;
        self.write_atomic(temp_file, &json)?;

        log::debug!(
            "Library saved to {} ({} books)",
            self.data_path.display(),
            books.len()
        );
        Ok(())
    }

    /// Ensures a directory exists, creating it if necessary
    fn ensure_directory_exists(&self, path: &Path) -> StoreResult<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(|e| StoreError::DirectoryCreationError {
                path: path.to_path_buf(),
                source: e,
            })?;
            log::info!("Created data directory: {}", path.display());
        }
        Ok(())
    }

    /// Creates a backup of the current library file
    fn backup_library(&self) -> StoreResult<()> {
        let backup_path = self.data_path.with_extension("json.backup");
        fs::copy(&self.data_path, &backup_path)
            .map_err(|e| StoreError::BackupError { source: e })?;
        log::debug!("Backed up library to {}", backup_path.display());
        Ok(())
    }

    /// Creates a temporary file in the same directory as the library file
    fn create_temp_file(&self) -> StoreResult<NamedTempFile> {
        let dir = self
            .data_path
            .parent()
            .ok_or_else(|| StoreError::PathResolutionError {
                reason: "Library path has no parent directory".to_string(),
            })?;

        NamedTempFile::new_in(dir).map_err(StoreError::IoError)
    }

    /// Writes content to a temporary file and atomically renames it
    fn write_atomic(&self, mut temp_file: NamedTempFile, content: &str) -> StoreResult<()> {
        temp_file
            .write_all(content.as_bytes())
            .map_err(StoreError::IoError)?;

        temp_file.flush().map_err(StoreError::IoError)?;

        temp_file
            .persist(&self.data_path)
            .map_err(|e| StoreError::WriteError {
                path: self.data_path.clone(),
                source: e.error,
            })?;

        Ok(())
    }
}

/// Returns the default library file path for this platform
///
/// Follows the XDG base directory specification:
/// - Linux: `~/.local/share/pagetrail/books.json`
/// - macOS: `~/Library/Application Support/pagetrail/books.json`
/// - Windows: `%APPDATA%\pagetrail\data\books.json`
pub fn default_data_path() -> StoreResult<PathBuf> {
    directories::ProjectDirs::from("", "", "pagetrail")
        .map(|proj_dirs| proj_dirs.data_dir().join("books.json"))
        .ok_or_else(|| StoreError::PathResolutionError {
            reason: "Could not determine user data directory".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagetrail_core::BookGenre;
    use tempfile::TempDir;

    fn setup_test_dir() -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = temp_dir.path().join("books.json");
        (temp_dir, data_path)
    }

    fn test_book(title: &str) -> Book {
        Book::new(
            title.to_string(),
            "Test Author".to_string(),
            200,
            BookGenre::Fiction,
        )
    }

    #[test]
    fn test_load_nonexistent_returns_empty() {
        let (_temp_dir, data_path) = setup_test_dir();
        let persistence = StorePersistence::new(data_path);

        let books = persistence.load().expect("Should load empty collection");
        assert!(books.is_empty());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let (_temp_dir, data_path) = setup_test_dir();
        let persistence = StorePersistence::new(data_path);

        let books = vec![test_book("One"), test_book("Two")];
        persistence.save(&books).expect("Should save library");

        let loaded = persistence.load().expect("Should load library");
        assert_eq!(loaded, books);
    }

    #[test]
    fn test_save_creates_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = temp_dir.path().join("nested").join("books.json");
        let persistence = StorePersistence::new(data_path.clone());

        persistence
            .save(&[test_book("One")])
            .expect("Should create directory and save");

        assert!(data_path.exists());
    }

    #[test]
    fn test_backup_created_on_overwrite() {
        let (_temp_dir, data_path) = setup_test_dir();
        let persistence = StorePersistence::new(data_path.clone());

        persistence.save(&[test_book("One")]).expect("first save");
        persistence.save(&[test_book("Two")]).expect("second save");

        let backup_path = data_path.with_extension("json.backup");
        assert!(backup_path.exists());

        // The backup holds the previous snapshot
        let backup_contents = fs::read_to_string(backup_path).expect("read backup");
        assert!(backup_contents.contains("One"));
    }

    #[test]
    fn test_empty_file_is_an_error() {
        let (_temp_dir, data_path) = setup_test_dir();
        fs::write(&data_path, "   \n").expect("write file");

        let persistence = StorePersistence::new(data_path);
        let result = persistence.load();

        assert!(matches!(result.unwrap_err(), StoreError::ReadError { .. }));
    }

    #[test]
    fn test_corrupt_file_is_a_parse_error() {
        let (_temp_dir, data_path) = setup_test_dir();
        fs::write(&data_path, "this is not JSON {{{").expect("write file");

        let persistence = StorePersistence::new(data_path);
        let result = persistence.load();

        assert!(matches!(result.unwrap_err(), StoreError::ParseError { .. }));
    }

    #[test]
    fn test_empty_array_is_a_valid_empty_library() {
        let (_temp_dir, data_path) = setup_test_dir();
        fs::write(&data_path, "[]").expect("write file");

        let persistence = StorePersistence::new(data_path);
        let books = persistence.load().expect("Should load empty array");
        assert!(books.is_empty());
    }

    #[test]
    fn test_load_keeps_books_with_validation_warnings() {
        let (_temp_dir, data_path) = setup_test_dir();
        let persistence = StorePersistence::new(data_path);

        let mut book = test_book("Odd");
        // current page past the total: warned about, never dropped
        book.current_page = 999;
        persistence.save(&[book]).expect("save");

        let loaded = persistence.load().expect("load");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].current_page, 999);
    }
}
