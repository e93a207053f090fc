//! The add form.
//!
//! The form is the session's one piece of UI state beyond the collection:
//! it is either open or closed. `add` opens it, a valid submission (or
//! cancellation) closes it.
//!
//! Interactively, the four fields are prompted one per line; a failed
//! submission prints the per-field errors and re-opens the form. In a
//! scripted session (stdin is not a terminal) a failed submission cancels
//! instead — retrying would silently swallow the next script lines as field
//! values.

use super::render;
use shelfapp::error::Result;
use shelfapp::model::NewBook;
use shelfapp::validate::{validate, BookForm};
use std::io::{Lines, StdinLock, Write};

pub enum FormOutcome {
    Submitted(NewBook),
    Cancelled,
}

/// Runs the add form against the session's input stream.
///
/// End of input cancels the form at any point.
pub fn run_form(
    lines: &mut Lines<StdinLock<'static>>,
    interactive: bool,
) -> Result<FormOutcome> {
    loop {
        let Some(title) = read_field(lines, "Title", interactive)? else {
            return Ok(FormOutcome::Cancelled);
        };
        let Some(author) = read_field(lines, "Author", interactive)? else {
            return Ok(FormOutcome::Cancelled);
        };
        let Some(pages) = read_field(lines, "Pages", interactive)? else {
            return Ok(FormOutcome::Cancelled);
        };
        let Some(read) = read_field(lines, "Read (Yes/No)", interactive)? else {
            return Ok(FormOutcome::Cancelled);
        };

        let form = BookForm {
            title,
            author,
            pages,
            read,
        };

        match validate(&form) {
            Ok(new_book) => return Ok(FormOutcome::Submitted(new_book)),
            Err(errors) => {
                print!("{}", render::render_form_errors(&errors));
                if !interactive {
                    return Ok(FormOutcome::Cancelled);
                }
                // Form stays open; prompt the fields again
            }
        }
    }
}

fn read_field(
    lines: &mut Lines<StdinLock<'static>>,
    label: &str,
    interactive: bool,
) -> Result<Option<String>> {
    if interactive {
        print!("  {}: ", label);
        std::io::stdout().flush()?;
    }
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}
