//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for all shelf operations, regardless of the UI in
//! front of it.
//!
//! ## Role and Responsibilities
//!
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs**: user-facing selectors become typed
//!   [`BookSelector`] values, deduplicated in input order
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It carries no business logic, performs no I/O, and returns data
//! structures, not strings — the render interface every UI builds on.
//!
//! ## Selector Grammar
//!
//! Users act on what a rendered card shows:
//!
//! - **List index**: `2` (1-based, insertion order)
//! - **Range**: `1-3` (inclusive; start must not exceed end)
//! - **Action token**: `#9f3c21e8` (hex prefix of the record id)
//!
//! Expansion and validation live in [`crate::index::parse_selector`];
//! resolution against the live collection happens in the command helpers.
//!
//! ## Generic Over BookStore
//!
//! `ShelfApi<S: BookStore>` is generic over the storage seam, so the API and
//! everything behind it can be driven by any collection implementation in
//! tests.

use crate::commands;
use crate::error::{Result, ShelfError};
use crate::index::{parse_selector, BookSelector};
use crate::model::NewBook;
use crate::store::BookStore;
use std::collections::HashSet;

/// The main API facade for shelf operations.
///
/// All UI clients (CLI, TUI, web, etc.) should interact through this API.
pub struct ShelfApi<S: BookStore> {
    store: S,
}

impl<S: BookStore> ShelfApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Appends a validated book to the shelf.
    pub fn add_book(&mut self, new_book: NewBook) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, new_book)
    }

    /// The collection in display order.
    pub fn list_books(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    /// Flips the read flag on every selected book.
    pub fn toggle_books<I: AsRef<str>>(&mut self, inputs: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(inputs)?;
        commands::toggle::run(&mut self.store, &selectors)
    }

    /// Removes every selected book from the shelf.
    pub fn delete_books<I: AsRef<str>>(&mut self, inputs: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(inputs)?;
        commands::delete::run(&mut self.store, &selectors)
    }

    /// The collection as pretty JSON.
    pub fn export_books(&self) -> Result<commands::CmdResult> {
        commands::export::run(&self.store)
    }
}

/// Parses raw selector words, expanding ranges and deduplicating while
/// preserving input order.
fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<BookSelector>> {
    let mut all = Vec::new();
    for input in inputs {
        let expanded = parse_selector(input.as_ref()).map_err(ShelfError::Api)?;
        all.extend(expanded);
    }

    let mut seen = HashSet::new();
    Ok(all.into_iter().filter(|s| seen.insert(s.clone())).collect())
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
