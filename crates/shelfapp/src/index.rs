//! Display indexing and selectors.
//!
//! The store addresses books by UUID; users address them by what they can
//! see on a rendered card. Two handles exist:
//!
//! - **List index**: the 1-based position in the rendered list (insertion
//!   order), optionally as a range (`2-4`).
//! - **Action token**: `#` plus a prefix of the record id's hex form, as
//!   printed on every card (e.g. `#9f3c21e8`).
//!
//! This module owns the mapping from user input to typed [`BookSelector`]
//! values; resolution against a live collection happens in
//! [`crate::commands::helpers`].

use crate::model::Book;

/// A book paired with its canonical 1-based list index.
#[derive(Debug, Clone)]
pub struct DisplayBook {
    pub book: Book,
    pub index: usize,
}

impl DisplayBook {
    /// The card's action token, derived from the record id.
    pub fn token(&self) -> String {
        self.book.action_token()
    }
}

/// Assigns canonical display indexes to the collection.
///
/// Indexes follow insertion order, starting at 1. Rendering, selector
/// resolution, and command results all use the same assignment, so an index
/// a user reads off the screen is the index the next command resolves.
pub fn index_books(books: Vec<Book>) -> Vec<DisplayBook> {
    books
        .into_iter()
        .enumerate()
        .map(|(i, book)| DisplayBook { book, index: i + 1 })
        .collect()
}

/// A user input selecting one book.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BookSelector {
    /// A 1-based list index.
    Index(usize),
    /// A lowercased hex prefix of a record id (without the leading `#`).
    Token(String),
}

impl std::fmt::Display for BookSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookSelector::Index(i) => write!(f, "{}", i),
            BookSelector::Token(t) => write!(f, "#{}", t),
        }
    }
}

/// Parses a single input word into one or more selectors.
///
/// Supported formats:
/// - Single index: `"3"`
/// - Range: `"2-4"` (expands to 2, 3, 4; start must not exceed end)
/// - Action token: `"#9f3c21e8"` (any hex prefix of at least two digits)
pub fn parse_selector(input: &str) -> std::result::Result<Vec<BookSelector>, String> {
    if let Some(token) = input.strip_prefix('#') {
        let token = token.to_ascii_lowercase();
        if token.len() >= 2 && token.len() <= 32 && token.chars().all(|c| c.is_ascii_hexdigit()) {
            return Ok(vec![BookSelector::Token(token)]);
        }
        return Err(format!("Invalid token '{}': expected hex digits after '#'", input));
    }

    if let Ok(n) = input.parse::<usize>() {
        if n == 0 {
            return Err("Invalid index 0: the list starts at 1".to_string());
        }
        return Ok(vec![BookSelector::Index(n)]);
    }

    if let Some((start_raw, end_raw)) = input.split_once('-') {
        let (start, end) = match (start_raw.parse::<usize>(), end_raw.parse::<usize>()) {
            (Ok(s), Ok(e)) => (s, e),
            _ => {
                return Err(unrecognized(input));
            }
        };
        if start == 0 {
            return Err("Invalid index 0: the list starts at 1".to_string());
        }
        if start > end {
            return Err(format!("Invalid range {}-{}: start exceeds end", start, end));
        }
        return Ok((start..=end).map(BookSelector::Index).collect());
    }

    Err(unrecognized(input))
}

fn unrecognized(input: &str) -> String {
    format!(
        "Unrecognized selector '{}': use a list index (2), a range (1-3), or an action token (#9f3c21e8)",
        input
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ReadStatus;

    #[test]
    fn test_index_books_follows_insertion_order() {
        let books = vec![
            Book::new("A".into(), "X".into(), 1, ReadStatus::Unread),
            Book::new("B".into(), "X".into(), 2, ReadStatus::Unread),
        ];
        let ids: Vec<_> = books.iter().map(|b| b.id).collect();

        let indexed = index_books(books);
        assert_eq!(indexed.len(), 2);
        assert_eq!(indexed[0].index, 1);
        assert_eq!(indexed[0].book.id, ids[0]);
        assert_eq!(indexed[1].index, 2);
        assert_eq!(indexed[1].book.id, ids[1]);
    }

    #[test]
    fn test_display_book_token_matches_record() {
        let book = Book::new("A".into(), "X".into(), 1, ReadStatus::Unread);
        let expected = book.action_token();
        let dp = DisplayBook { book, index: 1 };
        assert_eq!(dp.token(), expected);
    }

    #[test]
    fn test_parse_single_index() {
        assert_eq!(parse_selector("3").unwrap(), vec![BookSelector::Index(3)]);
        assert_eq!(parse_selector("42").unwrap(), vec![BookSelector::Index(42)]);
    }

    #[test]
    fn test_parse_range_expands() {
        assert_eq!(
            parse_selector("2-4").unwrap(),
            vec![
                BookSelector::Index(2),
                BookSelector::Index(3),
                BookSelector::Index(4)
            ]
        );
        assert_eq!(parse_selector("5-5").unwrap(), vec![BookSelector::Index(5)]);
    }

    #[test]
    fn test_parse_range_rejects_backwards() {
        let err = parse_selector("5-3").unwrap_err();
        assert!(err.contains("Invalid range"));
    }

    #[test]
    fn test_parse_rejects_index_zero() {
        assert!(parse_selector("0").is_err());
        assert!(parse_selector("0-2").is_err());
    }

    #[test]
    fn test_parse_token() {
        assert_eq!(
            parse_selector("#9F3C21E8").unwrap(),
            vec![BookSelector::Token("9f3c21e8".to_string())]
        );
        assert_eq!(
            parse_selector("#9f3c").unwrap(),
            vec![BookSelector::Token("9f3c".to_string())]
        );
    }

    #[test]
    fn test_parse_rejects_bad_token() {
        assert!(parse_selector("#").is_err());
        assert!(parse_selector("#x").is_err());
        assert!(parse_selector("#hello!").is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_selector("hobbit").unwrap_err();
        assert!(err.contains("Unrecognized selector"));
        assert!(parse_selector("1-2-3").is_err());
    }

    #[test]
    fn test_selector_display() {
        assert_eq!(BookSelector::Index(7).to_string(), "7");
        assert_eq!(BookSelector::Token("9f3c".into()).to_string(), "#9f3c");
    }
}
