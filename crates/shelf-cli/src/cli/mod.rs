//! # CLI Layer
//!
//! This module is **one possible UI client** for shelf—it is not the
//! application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Handles argument and session-line parsing
//! - Formats output for human consumption
//!
//! ## The Session
//!
//! `shelf` starts an interactive session: the collection is created (seeded
//! with one sample book unless `--empty` is passed), the shelf is rendered
//! once, and the loop then reads one command per line. Every mutation is
//! followed by a full re-render of the list, so the screen always reflects
//! the collection. The session ends on `quit` or end of input, and the
//! collection dies with it.
//!
//! ## Module Structure
//!
//! - `commands`: the session loop — dispatch, error display, re-rendering
//! - `form`: the add form (the one piece of UI state: open/closed)
//! - `render`: output formatting via Outstanding templates
//! - `setup`: process arguments and session-command parsing via clap
//! - `styles`: the terminal theme
//! - `templates`: embedded template sources

mod commands;
mod form;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;
