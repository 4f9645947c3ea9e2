//! The authoritative in-memory book collection
//!
//! Every mutation applies in memory first and then persists the full
//! collection. A failed save is logged and never rolls the mutation back:
//! the in-memory collection stays the source of truth for the session.

use crate::error::StoreResult;
use crate::persistence::StorePersistence;
use pagetrail_core::{Book, BookId};
use std::path::PathBuf;

/// A change applied to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// The collection was (re)loaded from disk
    Loaded,
    /// A new book was added
    Added(BookId),
    /// An existing book was updated in place
    Updated(BookId),
    /// A book was removed
    Removed(BookId),
    /// The whole collection was replaced
    Replaced,
}

/// Callback invoked synchronously after each store change
pub type Subscriber = Box<dyn Fn(&StoreEvent)>;

/// Owns the book collection and its persistence
pub struct BookStore {
    books: Vec<Book>,
    persistence: StorePersistence,
    subscribers: Vec<Subscriber>,
}

impl BookStore {
    /// Opens the store at the given path, loading any existing collection.
    ///
    /// An unreadable or corrupt file is logged and treated as an empty
    /// library; opening never fails.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let persistence = StorePersistence::new(path.into());
        let books = match persistence.load() {
            Ok(books) => {
                log::info!(
                    "Loaded {} books from {}",
                    books.len(),
                    persistence.path().display()
                );
                books
            }
            Err(err) => {
                log::error!("Failed to load library: {err}; starting with an empty collection");
                Vec::new()
            }
        };

        Self {
            books,
            persistence,
            subscribers: Vec::new(),
        }
    }

    /// Registers a listener invoked after every change
    pub fn subscribe(&mut self, subscriber: Subscriber) {
        self.subscribers.push(subscriber);
    }

    /// All books, in insertion order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Looks up a book by id
    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Returns true if a book with the given id exists
    pub fn contains(&self, id: BookId) -> bool {
        self.get(id).is_some()
    }

    /// Number of books in the collection
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns true if the collection holds no books
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Inserts the book, or replaces the stored copy with the same id.
    /// Persists and notifies afterward.
    pub fn upsert(&mut self, book: Book) -> StoreEvent {
        let id = book.id;
        let event = if let Some(existing) = self.books.iter_mut().find(|b| b.id == id) {
            *existing = book;
            StoreEvent::Updated(id)
        } else {
            self.books.push(book);
            StoreEvent::Added(id)
        };

        self.persist_after_change();
        self.notify(&event);
        event
    }

    /// Removes the book with the given id. Returns false if the id is
    /// unknown; nothing is persisted or notified in that case.
    pub fn remove(&mut self, id: BookId) -> bool {
        let before = self.books.len();
        self.books.retain(|b| b.id != id);
        if self.books.len() == before {
            return false;
        }

        self.persist_after_change();
        self.notify(&StoreEvent::Removed(id));
        true
    }

    /// Replaces the whole collection, persists, and notifies
    pub fn replace_all(&mut self, books: Vec<Book>) {
        self.books = books;
        self.persist_after_change();
        self.notify(&StoreEvent::Replaced);
    }

    /// Re-reads the collection from disk, discarding in-memory state.
    /// Load failures leave the current collection in place.
    pub fn reload(&mut self) {
        match self.persistence.load() {
            Ok(books) => {
                self.books = books;
                self.notify(&StoreEvent::Loaded);
            }
            Err(err) => {
                log::error!("Failed to reload library: {err}; keeping current collection");
            }
        }
    }

    /// Persists the current collection, surfacing the outcome to the caller
    pub fn save(&self) -> StoreResult<()> {
        self.persistence.save(&self.books)
    }

    fn persist_after_change(&self) {
        if let Err(err) = self.persistence.save(&self.books) {
            log::error!("Failed to persist library: {err}");
        }
    }

    fn notify(&self, event: &StoreEvent) {
        for subscriber in &self.subscribers {
            subscriber(event);
        }
    }
}
