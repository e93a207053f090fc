use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayBook;
use crate::model::{Book, NewBook};
use crate::store::BookStore;

pub fn run<S: BookStore>(store: &mut S, new_book: NewBook) -> Result<CmdResult> {
    let book = Book::from(new_book);
    store.add_book(book.clone());

    let mut result = CmdResult::default();
    // Appended to the end, so it gets the last index
    let index = store.list_books().len();
    result.affected_books.push(DisplayBook {
        book: book.clone(),
        index,
    });
    result.add_message(CmdMessage::success(format!("Added to shelf: {}", book.title)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ReadStatus;
    use crate::store::memory::Library;

    fn new_book(title: &str) -> NewBook {
        NewBook {
            title: title.to_string(),
            author: "Author".to_string(),
            pages: 100,
            read: ReadStatus::Unread,
        }
    }

    #[test]
    fn test_add_appends_to_the_end() {
        let mut library = Library::new();
        run(&mut library, new_book("First")).unwrap();
        let result = run(&mut library, new_book("Second")).unwrap();

        assert_eq!(result.affected_books.len(), 1);
        assert_eq!(result.affected_books[0].index, 2);
        assert_eq!(result.affected_books[0].book.title, "Second");

        let titles: Vec<String> = library.list_books().into_iter().map(|b| b.title).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn test_add_reports_success_message() {
        let mut library = Library::new();
        let result = run(&mut library, new_book("The Hobbit")).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, "Added to shelf: The Hobbit");
    }

    #[test]
    fn test_duplicate_titles_are_allowed() {
        let mut library = Library::new();
        run(&mut library, new_book("Same")).unwrap();
        run(&mut library, new_book("Same")).unwrap();

        let books = library.list_books();
        assert_eq!(books.len(), 2);
        assert_ne!(books[0].id, books[1].id);
    }
}
