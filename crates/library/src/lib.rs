//! Library orchestration for pagetrail
//!
//! Ties the domain rules, the derivation services, and the store together
//! behind [`LibraryManager`]. Callers that only read can use the services
//! in `pagetrail-search` and `pagetrail-stats` directly.

pub mod error;
pub mod manager;

pub use error::{LibraryError, LibraryResult};
pub use manager::LibraryManager;
