use crate::commands::{helpers::indexed_books, CmdResult};
use crate::error::Result;
use crate::store::BookStore;

pub fn run<S: BookStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_books(indexed_books(store)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::LibraryFixture;
    use crate::store::memory::Library;

    #[test]
    fn test_list_empty_shelf() {
        let library = Library::new();
        let result = run(&library).unwrap();
        assert!(result.listed_books.is_empty());
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_list_is_indexed_in_insertion_order() {
        let library = LibraryFixture::new().with_books(3).library;
        let result = run(&library).unwrap();

        assert_eq!(result.listed_books.len(), 3);
        for (i, dp) in result.listed_books.iter().enumerate() {
            assert_eq!(dp.index, i + 1);
            assert_eq!(dp.book.title, format!("Test Book {}", i + 1));
        }
    }
}
