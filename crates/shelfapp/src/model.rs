//! # Domain Model: Book Records
//!
//! This module defines the core data structures for shelf: [`Book`] and
//! [`ReadStatus`].
//!
//! A book is a flat record: title, author, page count, read status, plus the
//! identity fields (`id`, `added_at`) stamped at creation. The id is a v4
//! UUID, generated once and immutable for the record's lifetime; everything
//! the UI needs to target a specific card derives from it.
//!
//! Field normalization (trimming, page-count parsing, status parsing) happens
//! in [`crate::validate`] before a record is constructed, so `Book` carries
//! already-clean values.
//!
//! ## Read Status
//!
//! The read flag is a two-valued enumeration that serializes and displays as
//! `Yes` / `No`. [`Book::toggle_read`] flips it in place; applying the toggle
//! twice restores the original value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether a book has been read. Renders as `Yes` / `No`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadStatus {
    #[serde(rename = "Yes")]
    Read,
    #[serde(rename = "No")]
    Unread,
}

impl Default for ReadStatus {
    fn default() -> Self {
        Self::Unread
    }
}

impl ReadStatus {
    /// Lenient parse for the form's read field. The field is a closed choice
    /// in the UI, so unrecognized input falls back to unread rather than
    /// producing a field error.
    pub fn from_input(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "true" => Self::Read,
            _ => Self::Unread,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Read => Self::Unread,
            Self::Unread => Self::Read,
        }
    }
}

impl std::fmt::Display for ReadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read => write!(f, "Yes"),
            Self::Unread => write!(f, "No"),
        }
    }
}

/// The validated, normalized fields for a book about to be created.
/// Produced by [`crate::validate::validate`]; identity fields are stamped
/// when the record is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub pages: u32,
    pub read: ReadStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub pages: u32,
    pub read: ReadStatus,
    pub added_at: DateTime<Utc>,
}

impl Book {
    pub fn new(title: String, author: String, pages: u32, read: ReadStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            author,
            pages,
            read,
            added_at: Utc::now(),
        }
    }

    /// Flips the read flag between its two values, in place.
    pub fn toggle_read(&mut self) {
        self.read = self.read.toggled();
    }

    /// The short token that addresses this book's actions in the UI:
    /// `#` plus the first eight hex digits of the record id.
    pub fn action_token(&self) -> String {
        let simple = self.id.simple().to_string();
        format!("#{}", &simple[..8])
    }
}

impl From<NewBook> for Book {
    fn from(new_book: NewBook) -> Self {
        Book::new(new_book.title, new_book.author, new_book.pages, new_book.read)
    }
}
