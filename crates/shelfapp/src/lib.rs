//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic book tracking library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/shelf-cli)                               │
//! │  - Session loop, add form, templated rendering              │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (indexes, ranges, tokens → UUIDs)      │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract BookStore trait                                 │
//! │  - Library: the in-memory, session-owned collection         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Index System
//!
//! The shelf is addressed two ways: stable UUIDs at the store level, and
//! user-friendly handles at the UI level (1-based list indexes, ranges, and
//! `#`-prefixed action tokens derived from the id). See [`index`] for the
//! mapping.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage, validation), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! The same core could serve a TUI, a web front end, or any other UI.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): thorough unit tests of business logic.
//!    This is where the lion's share of testing lives.
//! 2. **API** (`api.rs`): tests verifying selector normalization and dispatch.
//! 3. **CLI** (`shelf-cli`): rendering tests against canned `CmdResult`
//!    values, plus scripted end-to-end sessions against the binary.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the in-memory collection
//! - [`model`]: Core data types ([`model::Book`], [`model::ReadStatus`])
//! - [`validate`]: The add-form validator
//! - [`index`]: Display indexing and selectors (indexes, ranges, tokens)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
pub mod validate;
