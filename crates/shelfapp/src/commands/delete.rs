use crate::commands::{helpers::resolve_selectors, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{BookSelector, DisplayBook};
use crate::store::BookStore;

pub fn run<S: BookStore>(store: &mut S, selectors: &[BookSelector]) -> Result<CmdResult> {
    let resolved = resolve_selectors(store, selectors)?;
    let mut result = CmdResult::default();

    for (index, id) in resolved {
        // An id that vanished between resolution and removal is a no-op
        let Some(book) = store.find_book(&id) else {
            continue;
        };
        if store.remove_book(&id) {
            result.add_message(CmdMessage::success(format!(
                "Removed from shelf: {}",
                book.title
            )));
            result.affected_books.push(DisplayBook { book, index });
        }
    }

    Ok(result)
}
