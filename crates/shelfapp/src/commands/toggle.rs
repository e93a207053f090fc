use crate::commands::{helpers::resolve_selectors, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{BookSelector, DisplayBook};
use crate::model::ReadStatus;
use crate::store::BookStore;

pub fn run<S: BookStore>(store: &mut S, selectors: &[BookSelector]) -> Result<CmdResult> {
    let resolved = resolve_selectors(store, selectors)?;
    let mut result = CmdResult::default();

    for (index, id) in resolved {
        let Some(mut book) = store.find_book(&id) else {
            continue;
        };
        book.toggle_read();
        store.save_book(book.clone());

        let message = match book.read {
            ReadStatus::Read => format!("Marked as read: {}", book.title),
            ReadStatus::Unread => format!("Marked as unread: {}", book.title),
        };
        result.add_message(CmdMessage::success(message));
        result.affected_books.push(DisplayBook { book, index });
    }

    Ok(result)
}
