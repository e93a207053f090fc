use crate::error::{Result, ShelfError};
use crate::index::{index_books, BookSelector, DisplayBook};
use crate::store::BookStore;
use uuid::Uuid;

pub fn indexed_books<S: BookStore>(store: &S) -> Vec<DisplayBook> {
    index_books(store.list_books())
}

/// Resolves selectors against the live collection.
///
/// Returns `(display index, id)` pairs in selector order. Indexes out of
/// range, tokens that match nothing, and tokens that match more than one
/// record are reported as `Api` errors — those are user-input failures, not
/// collection state.
pub fn resolve_selectors<S: BookStore>(
    store: &S,
    selectors: &[BookSelector],
) -> Result<Vec<(usize, Uuid)>> {
    let books = indexed_books(store);
    let mut results = Vec::new();

    for selector in selectors {
        match selector {
            BookSelector::Index(n) => {
                match n.checked_sub(1).and_then(|i| books.get(i)) {
                    Some(dp) => results.push((dp.index, dp.book.id)),
                    None => {
                        return Err(ShelfError::Api(format!("Index {} not found on the shelf", n)));
                    }
                }
            }
            BookSelector::Token(prefix) => {
                let matches: Vec<&DisplayBook> = books
                    .iter()
                    .filter(|dp| dp.book.id.simple().to_string().starts_with(prefix))
                    .collect();
                match matches.len() {
                    0 => {
                        return Err(ShelfError::Api(format!("No book matches token #{}", prefix)));
                    }
                    1 => results.push((matches[0].index, matches[0].book.id)),
                    n => {
                        return Err(ShelfError::Api(format!(
                            "Token #{} matches {} books, add more digits to make it unique",
                            prefix, n
                        )));
                    }
                }
            }
        }
    }

    Ok(results)
}
