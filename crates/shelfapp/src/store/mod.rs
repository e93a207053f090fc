//! # Storage Layer
//!
//! This module defines the storage abstraction for shelf. The [`BookStore`]
//! trait is the seam between the command layer and the collection that owns
//! the records.
//!
//! ## Ownership Model
//!
//! The shelf is pure in-memory state: one ordered collection, owned by the
//! session that created it, destroyed with the process. There is no
//! persistence, no cache to reconcile, and nothing that can fail at the
//! storage level — which is why the trait methods are infallible.
//!
//! ## Semantics
//!
//! - **Insertion order is the display order.** `list_books` returns records
//!   exactly as they were appended; there is no secondary indexing.
//! - **Ids are unique.** An id identifies at most one record at any time;
//!   `save_book` upserts by id and preserves the record's position.
//! - **Missing ids are no-ops, not errors.** `remove_book` on an absent id
//!   leaves the collection untouched and reports `false`; `find_book`
//!   returns `None`.
//!
//! ## Implementations
//!
//! - [`memory::Library`]: the session-owned collection. It is both the
//!   production store and the test store; keeping the trait means commands
//!   and the API stay backend-agnostic.

use crate::model::Book;
use uuid::Uuid;

pub mod memory;

/// Abstract interface for the book collection.
pub trait BookStore {
    /// Append a book to the end of the collection. Always succeeds; there
    /// are no duplicate or capacity checks.
    fn add_book(&mut self, book: Book);

    /// Replace the stored book with the same id, preserving its position.
    /// A book with an unknown id is appended.
    fn save_book(&mut self, book: Book);

    /// Find a book by id. Linear scan; `None` when absent.
    fn find_book(&self, id: &Uuid) -> Option<Book>;

    /// The full collection in insertion order.
    fn list_books(&self) -> Vec<Book>;

    /// Remove the first book with a matching id. Returns `false` (and leaves
    /// the collection unchanged) when the id is absent.
    fn remove_book(&mut self, id: &Uuid) -> bool;
}
