//! Persistence for the pagetrail book collection
//!
//! A single JSON file holds the whole library. [`BookStore`] owns the
//! in-memory collection and writes through on every mutation; reads are
//! free of I/O.

pub mod error;
pub mod persistence;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use persistence::{default_data_path, StorePersistence};
pub use store::{BookStore, StoreEvent, Subscriber};
