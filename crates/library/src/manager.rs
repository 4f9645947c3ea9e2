// FILE: crates/library/src/manager.rs

use crate::error::{LibraryError, Result};
use chrono::{NaiveDate, NaiveTime, Utc};
use log::{debug, info};
use pagetrail_core::{
    find_duplicate, Book, BookDraft, BookEdit, BookId, DailyActivity, FilterSettings,
    ProgressUpdate, ReadingStatistics, ValidationError,
};
use pagetrail_store::{BookStore, Subscriber};
use std::path::PathBuf;

/// High-level library management
///
/// The mutation front door: runs the shared validation rules, keeps the
/// derived completion state consistent, and sends every change through the
/// store so it is persisted and announced.
pub struct LibraryManager {
    store: BookStore,
}

impl LibraryManager {
    /// Opens the library at the given data file
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            store: BookStore::open(path),
        }
    }

    /// Opens the library at the platform default data path
    pub fn open_default() -> Result<Self> {
        let path = pagetrail_store::default_data_path()?;
        Ok(Self::open(path))
    }

    /// Read access to the underlying store
    pub fn store(&self) -> &BookStore {
        &self.store
    }

    /// Registers a listener for store changes
    pub fn subscribe(&mut self, subscriber: Subscriber) {
        self.store.subscribe(subscriber);
    }

    /// All books, in insertion order
    pub fn books(&self) -> &[Book] {
        self.store.books()
    }

    /// Looks up a book by id
    pub fn get_book(&self, id: BookId) -> Result<&Book> {
        self.store.get(id).ok_or(LibraryError::BookNotFound(id))
    }

    /// Validates the draft and adds the new book.
    ///
    /// Rejects drafts whose title and author match an existing book
    /// case-insensitively. The collection is unchanged on any error.
    pub fn add_book(&mut self, draft: BookDraft) -> Result<Book> {
        let book = draft.build().map_err(LibraryError::Invalid)?;

        if let Some(existing) = find_duplicate(self.store.books(), &book.title, &book.author, None)
        {
            return Err(LibraryError::DuplicateBook {
                title: existing.title.clone(),
                author: existing.author.clone(),
            });
        }

        info!("Added '{}' by {}", book.title, book.author);
        self.store.upsert(book.clone());
        Ok(book)
    }

    /// Validates the edit and applies it to the book.
    ///
    /// The duplicate check skips the book itself, so saving it under its
    /// own name always passes. Completion is re-derived from the edited
    /// pages: reaching the last page sets the finish date, dropping below
    /// it clears one.
    pub fn edit_book(&mut self, id: BookId, edit: BookEdit) -> Result<Book> {
        let mut book = self.get_book(id)?.clone();
        edit.apply(&mut book).map_err(LibraryError::Invalid)?;

        if let Some(existing) =
            find_duplicate(self.store.books(), &book.title, &book.author, Some(id))
        {
            return Err(LibraryError::DuplicateBook {
                title: existing.title.clone(),
                author: existing.author.clone(),
            });
        }

        info!("Updated '{}'", book.title);
        self.store.upsert(book.clone());
        Ok(book)
    }

    /// Logs a day's reading and merges it into the history.
    ///
    /// Same-day logs accumulate into one entry. Reaching the last page
    /// marks the book finished as of that day; logging never clears an
    /// existing finish date.
    pub fn log_progress(
        &mut self,
        id: BookId,
        date: NaiveDate,
        update: ProgressUpdate,
    ) -> Result<Book> {
        let mut book = self.get_book(id)?.clone();
        let (pages_read, new_page) = update
            .resolve(&book)
            .map_err(|e| LibraryError::Invalid(vec![e]))?;

        book.add_reading_entry(date, pages_read, new_page);
        book.current_page = new_page;
        if new_page == book.total_pages && book.finish_date.is_none() {
            book.finish_date = Some(date.and_time(NaiveTime::MIN).and_utc());
        }

        debug!("Logged {} pages for '{}' on {}", pages_read, book.title, date);
        self.store.upsert(book.clone());
        Ok(book)
    }

    /// Logs reading for today
    pub fn log_progress_today(&mut self, id: BookId, update: ProgressUpdate) -> Result<Book> {
        self.log_progress(id, Utc::now().date_naive(), update)
    }

    /// Sets the page reached directly, optionally toggling completion.
    ///
    /// This quick flow leaves the reading history untouched. Marking the
    /// book finished snaps the page to the last one; un-marking clears the
    /// finish date.
    pub fn set_progress(&mut self, id: BookId, current_page: u32, finished: bool) -> Result<Book> {
        let mut book = self.get_book(id)?.clone();

        if current_page > book.total_pages {
            return Err(LibraryError::Invalid(vec![ValidationError::with_value(
                "current_page",
                "Current page cannot exceed total pages",
                current_page,
            )]));
        }

        book.current_page = if finished {
            book.total_pages
        } else {
            current_page
        };

        if finished && book.finish_date.is_none() {
            book.finish_date = Some(Utc::now());
        } else if !finished && book.finish_date.is_some() {
            book.finish_date = None;
        }

        debug!("Set '{}' to page {}", book.title, book.current_page);
        self.store.upsert(book.clone());
        Ok(book)
    }

    /// Removes a book and its whole history
    pub fn delete_book(&mut self, id: BookId) -> Result<()> {
        if !self.store.remove(id) {
            return Err(LibraryError::BookNotFound(id));
        }
        info!("Deleted book {id}");
        Ok(())
    }

    /// The library view for the given settings
    pub fn filtered(&self, settings: &FilterSettings) -> Vec<Book> {
        pagetrail_search::filter_and_sort(self.store.books(), settings)
    }

    /// Aggregate statistics snapshot as of today
    pub fn statistics(&self) -> ReadingStatistics {
        pagetrail_stats::compute(self.store.books())
    }

    /// Aggregate statistics snapshot as of the given day
    pub fn statistics_at(&self, today: NaiveDate) -> ReadingStatistics {
        pagetrail_stats::compute_at(self.store.books(), today)
    }

    /// Per-day activity for the trailing `days` days
    pub fn recent_activity(&self, days: u32) -> Vec<DailyActivity> {
        pagetrail_stats::recent_daily_activity(self.store.books(), days)
    }
}
