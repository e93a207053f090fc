//! # Shelf CLI
//!
//! Shelf ships with an interactive terminal client, but the binary is
//! intentionally thin: the CLI lives in `src/cli/`, while this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! Shelf is organized as a Cargo workspace with two crates:
//! - `crates/shelfapp/` — core library with UI-agnostic application logic
//! - `crates/shelf-cli/` — this client, depends on the `shelfapp` library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/shelf-cli/src/cli/)                      │
//! │  - clap argument + session parsing (setup.rs)               │
//! │  - Session loop and dispatch (commands.rs)                  │
//! │  - The add form (form.rs)                                   │
//! │  - Terminal rendering via Outstanding templates (render.rs) │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/shelfapp/src/api.rs)                     │
//! │  - Normalizes user-facing selectors → UUIDs                 │
//! │  - Dispatches to command modules                            │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic: functions take normal
//! Rust values, return normal Rust types, and never assume terminal I/O.
//! The CLI layer is therefore responsible for **all** user-facing concerns:
//! parsing, the session loop, error display, and rendering.
//!
//! ## Rendering with Outstanding
//!
//! Terminal output is produced through the `outstanding` crate. Templates
//! live in `src/cli/templates/` and are embedded at compile time via
//! `include_str!()`. `render.rs` feeds data structures into those templates
//! and the session loop simply prints the rendered strings.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
