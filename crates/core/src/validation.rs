//! Shared validation for the add, edit, and progress-logging flows
//!
//! Every mutation path runs through the same rules here, so the add and
//! edit forms cannot drift apart. Validation never mutates anything: a
//! draft either produces a clean [`Book`] or a list of field errors.

use crate::error::ValidationError;
use crate::types::{Book, BookGenre, BookId};
use chrono::{DateTime, Utc};

/// Minimum length for a trimmed title, in characters
pub const TITLE_MIN: usize = 2;
/// Maximum length for a trimmed title, in characters
pub const TITLE_MAX: usize = 200;
/// Minimum length for a trimmed author, in characters
pub const AUTHOR_MIN: usize = 2;
/// Maximum length for a trimmed author, in characters
pub const AUTHOR_MAX: usize = 100;
/// Smallest accepted page count
pub const PAGES_MIN: u32 = 1;
/// Largest accepted page count
pub const PAGES_MAX: u32 = 10_000;

/// Form input for creating a new book
///
/// `total_pages` stays a raw string until validation so the form can report
/// "not a number" separately from "out of range".
#[derive(Debug, Clone)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub total_pages: String,
    pub genre: BookGenre,
    pub start_date: Option<DateTime<Utc>>,
    pub cover_image: Option<Vec<u8>>,
}

impl BookDraft {
    /// Creates a draft with the required fields
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        total_pages: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            total_pages: total_pages.into(),
            genre: BookGenre::default(),
            start_date: None,
            cover_image: None,
        }
    }

    /// Sets the genre
    pub fn with_genre(mut self, genre: BookGenre) -> Self {
        self.genre = genre;
        self
    }

    /// Marks the book as already started on the given date
    pub fn with_start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Attaches raw cover image bytes
    pub fn with_cover_image(mut self, data: Vec<u8>) -> Self {
        self.cover_image = Some(data);
        self
    }

    /// Validates the draft against the current time
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        self.validate_at(Utc::now())
    }

    /// Validates the draft against an explicit "now"
    pub fn validate_at(&self, now: DateTime<Utc>) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        validate_title(&self.title, &mut errors);
        validate_author(&self.author, &mut errors);
        if let Err(e) = parse_page_count("total_pages", &self.total_pages) {
            errors.push(e);
        }
        if let Some(start) = self.start_date {
            if start > now {
                errors.push(ValidationError::new(
                    "start_date",
                    "Start date cannot be in the future",
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validates the draft and builds the new book from it.
    ///
    /// The book starts at page zero with an empty history; title and author
    /// are stored trimmed.
    pub fn build(&self) -> Result<Book, Vec<ValidationError>> {
        self.build_at(Utc::now())
    }

    /// Same as [`build`](Self::build) with an explicit "now"
    pub fn build_at(&self, now: DateTime<Utc>) -> Result<Book, Vec<ValidationError>> {
        self.validate_at(now)?;

        let total_pages = parse_page_count("total_pages", &self.total_pages).map_err(|e| vec![e])?;

        let mut book = Book::new(
            self.title.trim().to_string(),
            self.author.trim().to_string(),
            total_pages,
            self.genre,
        );
        book.date_added = now;
        book.start_date = self.start_date;
        book.cover_image = self.cover_image.clone();
        Ok(book)
    }
}

/// Form input for editing an existing book
///
/// Carries the complete editable state; applying it replaces those fields
/// wholesale, so clearing the start date or cover is just leaving them
/// `None`.
#[derive(Debug, Clone)]
pub struct BookEdit {
    pub title: String,
    pub author: String,
    pub total_pages: String,
    pub current_page: String,
    pub genre: BookGenre,
    pub start_date: Option<DateTime<Utc>>,
    pub cover_image: Option<Vec<u8>>,
}

impl BookEdit {
    /// Prefills an edit form from the book's current state
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            total_pages: book.total_pages.to_string(),
            current_page: book.current_page.to_string(),
            genre: book.genre,
            start_date: book.start_date,
            cover_image: book.cover_image.clone(),
        }
    }

    /// Returns the title as it would be stored
    pub fn trimmed_title(&self) -> &str {
        self.title.trim()
    }

    /// Returns the author as it would be stored
    pub fn trimmed_author(&self) -> &str {
        self.author.trim()
    }

    /// Validates the edit against the current time
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        self.validate_at(Utc::now())
    }

    /// Validates the edit against an explicit "now"
    pub fn validate_at(&self, now: DateTime<Utc>) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        validate_title(&self.title, &mut errors);
        validate_author(&self.author, &mut errors);

        let total = parse_page_count("total_pages", &self.total_pages);
        if let Err(ref e) = total {
            errors.push(e.clone());
        }

        let current = parse_current_page(&self.current_page);
        match (&current, &total) {
            (Ok(current), Ok(total)) if current > total => {
                errors.push(ValidationError::with_value(
                    "current_page",
                    "Current page cannot exceed total pages",
                    current,
                ));
            }
            (Err(e), _) => errors.push(e.clone()),
            _ => {}
        }

        if let Some(start) = self.start_date {
            if start > now {
                errors.push(ValidationError::new(
                    "start_date",
                    "Start date cannot be in the future",
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validates the edit and applies it to the book.
    ///
    /// Completion state is re-derived afterward: reaching the last page sets
    /// the finish date to `now`, and dropping below it clears a finish date
    /// that was set.
    pub fn apply(&self, book: &mut Book) -> Result<(), Vec<ValidationError>> {
        self.apply_at(book, Utc::now())
    }

    /// Same as [`apply`](Self::apply) with an explicit "now"
    pub fn apply_at(&self, book: &mut Book, now: DateTime<Utc>) -> Result<(), Vec<ValidationError>> {
        self.validate_at(now)?;

        let total_pages = parse_page_count("total_pages", &self.total_pages).map_err(|e| vec![e])?;
        let current_page = parse_current_page(&self.current_page).map_err(|e| vec![e])?;

        book.title = self.title.trim().to_string();
        book.author = self.author.trim().to_string();
        book.total_pages = total_pages;
        book.current_page = current_page;
        book.genre = self.genre;
        book.start_date = self.start_date;
        book.cover_image = self.cover_image.clone();

        if current_page == total_pages && book.finish_date.is_none() {
            book.finish_date = Some(now);
        } else if current_page < total_pages && book.finish_date.is_some() {
            book.finish_date = None;
        }

        Ok(())
    }
}

/// How a day's reading is being reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressUpdate {
    /// "I read this many pages today"
    PagesToday(u32),
    /// "I got to this page"
    ReachedPage(u32),
}

impl ProgressUpdate {
    /// Checks the update against the book and resolves it to
    /// `(pages_read, new_current_page)`.
    pub fn resolve(&self, book: &Book) -> Result<(u32, u32), ValidationError> {
        match *self {
            Self::PagesToday(pages) => {
                if pages == 0 {
                    return Err(ValidationError::new(
                        "pages_read",
                        "Pages read must be greater than zero",
                    ));
                }
                if book.current_page.saturating_add(pages) > book.total_pages {
                    return Err(ValidationError::with_value(
                        "pages_read",
                        "Pages read would pass the end of the book",
                        pages,
                    ));
                }
                Ok((pages, book.current_page + pages))
            }
            Self::ReachedPage(page) => {
                if page <= book.current_page {
                    return Err(ValidationError::with_value(
                        "current_page",
                        "Page must be greater than the current page",
                        page,
                    ));
                }
                if page > book.total_pages {
                    return Err(ValidationError::with_value(
                        "current_page",
                        "Page cannot exceed total pages",
                        page,
                    ));
                }
                Ok((page - book.current_page, page))
            }
        }
    }
}

/// Finds a book with the same trimmed title and author, compared
/// case-insensitively.
///
/// `exclude` skips the book being edited, so saving a book under its own
/// name is not a collision.
pub fn find_duplicate<'a>(
    books: &'a [Book],
    title: &str,
    author: &str,
    exclude: Option<BookId>,
) -> Option<&'a Book> {
    let title = title.trim().to_lowercase();
    let author = author.trim().to_lowercase();

    books.iter().find(|book| {
        exclude.map_or(true, |id| book.id != id)
            && book.title.to_lowercase() == title
            && book.author.to_lowercase() == author
    })
}

fn validate_title(title: &str, errors: &mut Vec<ValidationError>) {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        errors.push(ValidationError::new("title", "Title is required"));
    } else if trimmed.chars().count() < TITLE_MIN {
        errors.push(ValidationError::new(
            "title",
            format!("Title must be at least {} characters", TITLE_MIN),
        ));
    } else if trimmed.chars().count() > TITLE_MAX {
        errors.push(ValidationError::new(
            "title",
            format!("Title cannot exceed {} characters", TITLE_MAX),
        ));
    }
}

fn validate_author(author: &str, errors: &mut Vec<ValidationError>) {
    let trimmed = author.trim();
    if trimmed.is_empty() {
        errors.push(ValidationError::new("author", "Author is required"));
    } else if trimmed.chars().count() < AUTHOR_MIN {
        errors.push(ValidationError::new(
            "author",
            format!("Author must be at least {} characters", AUTHOR_MIN),
        ));
    } else if trimmed.chars().count() > AUTHOR_MAX {
        errors.push(ValidationError::new(
            "author",
            format!("Author cannot exceed {} characters", AUTHOR_MAX),
        ));
    }
}

fn parse_page_count(field: &str, raw: &str) -> Result<u32, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, "Page count is required"));
    }
    let pages: u32 = trimmed
        .parse()
        .map_err(|_| ValidationError::with_value(field, "Page count must be a whole number", raw))?;
    if !(PAGES_MIN..=PAGES_MAX).contains(&pages) {
        return Err(ValidationError::with_value(
            field,
            format!("Page count must be between {} and {}", PAGES_MIN, PAGES_MAX),
            pages,
        ));
    }
    Ok(pages)
}

fn parse_current_page(raw: &str) -> Result<u32, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(
            "current_page",
            "Current page is required",
        ));
    }
    trimmed.parse().map_err(|_| {
        ValidationError::with_value("current_page", "Current page must be a whole number", raw)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn valid_draft() -> BookDraft {
        BookDraft::new("The Dispossessed", "Ursula K. Le Guin", "387")
            .with_genre(BookGenre::ScienceFiction)
    }

    fn library_with(titles: &[(&str, &str)]) -> Vec<Book> {
        titles
            .iter()
            .map(|(title, author)| {
                Book::new(
                    title.to_string(),
                    author.to_string(),
                    100,
                    BookGenre::Fiction,
                )
            })
            .collect()
    }

    #[test]
    fn test_draft_valid() {
        assert!(valid_draft().validate().is_ok());
    }

    #[test]
    fn test_draft_title_rules() {
        let mut draft = valid_draft();
        draft.title = "  ".to_string();
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors[0].field, "title");

        draft.title = "A".to_string();
        assert!(draft.validate().is_err());

        draft.title = "A".repeat(201);
        assert!(draft.validate().is_err());

        // Whitespace padding does not count toward the length
        draft.title = "  Ok  ".to_string();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_draft_author_rules() {
        let mut draft = valid_draft();
        draft.author = String::new();
        assert!(draft.validate().is_err());

        draft.author = "X".repeat(101);
        assert!(draft.validate().is_err());

        draft.author = "Xi".to_string();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_draft_page_rules() {
        let mut draft = valid_draft();
        draft.total_pages = String::new();
        assert!(draft.validate().is_err());

        draft.total_pages = "many".to_string();
        assert!(draft.validate().is_err());

        draft.total_pages = "0".to_string();
        assert!(draft.validate().is_err());

        draft.total_pages = "10001".to_string();
        assert!(draft.validate().is_err());

        draft.total_pages = "10000".to_string();
        assert!(draft.validate().is_ok());

        draft.total_pages = "1".to_string();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_draft_future_start_date() {
        let now = Utc::now();
        let draft = valid_draft().with_start_date(now + Duration::days(1));
        let errors = draft.validate_at(now).unwrap_err();
        assert_eq!(errors[0].field, "start_date");

        let draft = valid_draft().with_start_date(now - Duration::days(3));
        assert!(draft.validate_at(now).is_ok());
    }

    #[test]
    fn test_draft_collects_all_errors() {
        let draft = BookDraft::new("", "", "zero");
        let errors = draft.validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["title", "author", "total_pages"]);
    }

    #[test]
    fn test_draft_build() {
        let now = Utc::now();
        let draft = BookDraft::new("  Kindred  ", " Octavia E. Butler ", "264")
            .with_genre(BookGenre::Fiction)
            .with_cover_image(vec![9, 9]);
        let book = draft.build_at(now).unwrap();

        assert_eq!(book.title, "Kindred");
        assert_eq!(book.author, "Octavia E. Butler");
        assert_eq!(book.total_pages, 264);
        assert_eq!(book.current_page, 0);
        assert_eq!(book.date_added, now);
        assert_eq!(book.cover_image, Some(vec![9, 9]));
        assert!(book.reading_history.is_empty());
    }

    #[test]
    fn test_draft_build_rejects_invalid() {
        let draft = BookDraft::new("X", "Author Name", "100");
        assert!(draft.build().is_err());
    }

    #[test]
    fn test_edit_from_book_roundtrip() {
        let mut book = Book::new(
            "Solaris".to_string(),
            "Stanislaw Lem".to_string(),
            204,
            BookGenre::ScienceFiction,
        );
        book.current_page = 50;

        let edit = BookEdit::from_book(&book);
        assert_eq!(edit.title, "Solaris");
        assert_eq!(edit.total_pages, "204");
        assert_eq!(edit.current_page, "50");

        let mut edited = book.clone();
        edit.apply(&mut edited).unwrap();
        assert_eq!(edited.title, book.title);
        assert_eq!(edited.current_page, 50);
        assert!(edited.finish_date.is_none());
    }

    #[test]
    fn test_edit_rejects_current_past_total() {
        let mut book = Book::new(
            "Test".to_string(),
            "Author".to_string(),
            100,
            BookGenre::Fiction,
        );
        let mut edit = BookEdit::from_book(&book);
        edit.current_page = "101".to_string();

        let errors = edit.apply(&mut book).unwrap_err();
        assert_eq!(errors[0].field, "current_page");
    }

    #[test]
    fn test_edit_reaching_last_page_sets_finish_date() {
        let now = Utc::now();
        let mut book = Book::new(
            "Test".to_string(),
            "Author".to_string(),
            100,
            BookGenre::Fiction,
        );
        let mut edit = BookEdit::from_book(&book);
        edit.current_page = "100".to_string();

        edit.apply_at(&mut book, now).unwrap();
        assert_eq!(book.finish_date, Some(now));
    }

    #[test]
    fn test_edit_dropping_below_total_clears_finish_date() {
        let mut book = Book::new(
            "Test".to_string(),
            "Author".to_string(),
            100,
            BookGenre::Fiction,
        );
        book.current_page = 100;
        book.finish_date = Some(Utc::now());

        let mut edit = BookEdit::from_book(&book);
        edit.current_page = "40".to_string();
        edit.apply(&mut book).unwrap();

        assert!(book.finish_date.is_none());
        assert_eq!(book.current_page, 40);
    }

    #[test]
    fn test_edit_keeps_existing_finish_date_at_total() {
        let finished = Utc::now() - Duration::days(30);
        let mut book = Book::new(
            "Test".to_string(),
            "Author".to_string(),
            100,
            BookGenre::Fiction,
        );
        book.current_page = 100;
        book.finish_date = Some(finished);

        let edit = BookEdit::from_book(&book);
        edit.apply(&mut book).unwrap();

        // Still complete: the original finish date must survive
        assert_eq!(book.finish_date, Some(finished));
    }

    #[test]
    fn test_progress_pages_today() {
        let mut book = Book::new(
            "Test".to_string(),
            "Author".to_string(),
            100,
            BookGenre::Fiction,
        );
        book.current_page = 40;

        assert_eq!(ProgressUpdate::PagesToday(25).resolve(&book), Ok((25, 65)));
        assert_eq!(ProgressUpdate::PagesToday(60).resolve(&book), Ok((60, 100)));

        assert!(ProgressUpdate::PagesToday(0).resolve(&book).is_err());
        assert!(ProgressUpdate::PagesToday(61).resolve(&book).is_err());
    }

    #[test]
    fn test_progress_reached_page() {
        let mut book = Book::new(
            "Test".to_string(),
            "Author".to_string(),
            100,
            BookGenre::Fiction,
        );
        book.current_page = 40;

        assert_eq!(ProgressUpdate::ReachedPage(65).resolve(&book), Ok((25, 65)));
        assert_eq!(
            ProgressUpdate::ReachedPage(100).resolve(&book),
            Ok((60, 100))
        );

        // Must move forward and stay within the book
        assert!(ProgressUpdate::ReachedPage(40).resolve(&book).is_err());
        assert!(ProgressUpdate::ReachedPage(30).resolve(&book).is_err());
        assert!(ProgressUpdate::ReachedPage(101).resolve(&book).is_err());
    }

    #[test]
    fn test_progress_on_finished_book_has_no_valid_input() {
        let mut book = Book::new(
            "Test".to_string(),
            "Author".to_string(),
            100,
            BookGenre::Fiction,
        );
        book.current_page = 100;

        assert!(ProgressUpdate::PagesToday(1).resolve(&book).is_err());
        assert!(ProgressUpdate::ReachedPage(100).resolve(&book).is_err());
    }

    #[test]
    fn test_find_duplicate_case_insensitive() {
        let books = library_with(&[("Dune", "Frank Herbert"), ("Emma", "Jane Austen")]);

        assert!(find_duplicate(&books, "dune", "FRANK HERBERT", None).is_some());
        assert!(find_duplicate(&books, "  Dune ", "Frank Herbert", None).is_some());
        assert!(find_duplicate(&books, "Dune", "Someone Else", None).is_none());
        assert!(find_duplicate(&books, "Duna", "Frank Herbert", None).is_none());
    }

    #[test]
    fn test_find_duplicate_excludes_given_id() {
        let books = library_with(&[("Dune", "Frank Herbert")]);
        let id = books[0].id;

        assert!(find_duplicate(&books, "Dune", "Frank Herbert", Some(id)).is_none());
        assert!(find_duplicate(&books, "Dune", "Frank Herbert", Some(BookId::new())).is_some());
    }
}
