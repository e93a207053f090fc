//! # Command Layer
//!
//! This module contains the **core business logic** of shelf. Each operation
//! lives in its own submodule and implements pure Rust functions over the
//! [`crate::store::BookStore`] trait.
//!
//! ## What Commands Do NOT Do
//!
//! Commands explicitly avoid:
//! - **Any I/O**: no stdout, stderr, or terminal concerns
//! - **Argument parsing**: that's the CLI layer's job
//! - **Exit codes**: return `Result`, let the caller decide
//! - **User interaction**: no prompts or confirmations
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings. The struct carries:
//! - `affected_books`: books a mutation touched, with their display index
//! - `listed_books`: books to display, in canonical order
//! - `json`: a serialized payload (for `export`)
//! - `messages`: leveled messages (info, success, warning, error)
//!
//! The UI layer decides how to render this data.
//!
//! ## Testing Strategy
//!
//! This is where the lion's share of testing lives. Command tests run
//! against [`crate::store::memory::Library`] and verify logic branches,
//! edge cases, and `CmdResult` contents.
//!
//! ## Command Modules
//!
//! - [`add`]: append a validated book
//! - [`delete`]: remove books by selector
//! - [`toggle`]: flip read status by selector
//! - [`list`]: the collection in display order
//! - [`export`]: the collection as JSON
//! - [`helpers`]: shared selector resolution

use crate::index::DisplayBook;
use serde::Serialize;

pub mod add;
pub mod delete;
pub mod export;
pub mod helpers;
pub mod list;
pub mod toggle;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_books: Vec<DisplayBook>,
    pub listed_books: Vec<DisplayBook>,
    pub json: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_books(mut self, books: Vec<DisplayBook>) -> Self {
        self.listed_books = books;
        self
    }
}
