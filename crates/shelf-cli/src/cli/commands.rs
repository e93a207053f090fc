//! The session loop.
//!
//! This is the controller: it owns the collection for the lifetime of the
//! process, reads one command per line, and re-renders the full list after
//! every mutation. Every handler runs to completion before the next line is
//! read; there is no other state to manage.
//!
//! Selector mistakes (a bad index, an unknown token, a malformed range) are
//! user input, not faults: they are rendered as one error line and the
//! session continues. Only I/O failures end the session with an error.

use super::form::{self, FormOutcome};
use super::render;
use super::setup::{self, Cli, SessionCommand};
use clap::Parser;
use shelfapp::api::{CmdMessage, CmdResult, ShelfApi};
use shelfapp::error::{Result, ShelfError};
use shelfapp::model::{NewBook, ReadStatus};
use shelfapp::store::memory::Library;
use std::io::{self, BufRead, IsTerminal, Write};

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut api = ShelfApi::new(Library::new());
    if !cli.empty {
        // The sample record every session starts with
        api.add_book(NewBook {
            title: "The Hobbit".to_string(),
            author: "Tolkien".to_string(),
            pages: 295,
            read: ReadStatus::Unread,
        })?;
    }

    let interactive = io::stdin().is_terminal();

    // First paint, before any input
    render_list(&api)?;

    let mut lines = io::stdin().lock().lines();
    loop {
        if interactive {
            prompt()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let command = match setup::parse_session_line(line) {
            Ok(command) => command,
            Err(e) => {
                // clap renders help and usage errors itself
                let _ = e.print();
                continue;
            }
        };

        match command {
            SessionCommand::List => render_list(&api)?,
            SessionCommand::Add => match form::run_form(&mut lines, interactive)? {
                FormOutcome::Submitted(new_book) => {
                    let result = api.add_book(new_book);
                    finish_mutation(&api, result)?;
                }
                FormOutcome::Cancelled => {
                    render::print_messages(&[CmdMessage::info("Nothing added.")]);
                }
            },
            SessionCommand::Toggle { selectors } => {
                let result = api.toggle_books(&selectors);
                finish_mutation(&api, result)?;
            }
            SessionCommand::Delete { selectors } => {
                let result = api.delete_books(&selectors);
                finish_mutation(&api, result)?;
            }
            SessionCommand::Export => {
                let result = api.export_books()?;
                if let Some(json) = result.json {
                    println!("{}", json);
                }
            }
            SessionCommand::Quit => break,
        }
    }

    Ok(())
}

/// Prints messages and re-renders the list after a mutation. Selector
/// failures are shown inline; anything else propagates.
fn finish_mutation(api: &ShelfApi<Library>, result: Result<CmdResult>) -> Result<()> {
    match result {
        Ok(result) => {
            render::print_messages(&result.messages);
            render_list(api)?;
        }
        Err(ShelfError::Api(message)) => {
            render::print_messages(&[CmdMessage::error(message)]);
        }
        Err(e) => return Err(e),
    }
    Ok(())
}

fn render_list(api: &ShelfApi<Library>) -> Result<()> {
    let result = api.list_books()?;
    print!("{}", render::render_book_list(&result.listed_books));
    Ok(())
}

fn prompt() -> Result<()> {
    print!("shelf> ");
    io::stdout().flush()?;
    Ok(())
}
