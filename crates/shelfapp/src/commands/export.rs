use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::BookStore;

/// Serializes the collection as pretty JSON, in display order. Output only:
/// nothing is written anywhere, the UI decides where the text goes.
pub fn run<S: BookStore>(store: &S) -> Result<CmdResult> {
    let books = store.list_books();
    let json = serde_json::to_string_pretty(&books)?;

    let mut result = CmdResult::default();
    result.json = Some(json);
    Ok(result)
}
