//! # Rendering Module
//!
//! Styled terminal output via the `outstanding` crate. Templates are
//! embedded from `templates/` and rendered with automatic terminal color
//! detection.
//!
//! ## Design Philosophy
//!
//! Layout calculations (width, truncation, padding) stay in Rust because
//! they require Unicode-aware processing. Templates handle presentation:
//! style selection based on semantic flags and conditional sections.
//!
//! Rendering is a deterministic function of the book list: every call
//! rebuilds the complete card list from scratch, so the screen state after a
//! render depends only on the collection, never on previous output.

use super::styles::{names, SHELF_THEME};
use super::templates::{FORM_ERRORS_TEMPLATE, LIST_TEMPLATE, MESSAGES_TEMPLATE};
use chrono::{DateTime, Utc};
use outstanding::{render, render_with_output, truncate_to_width, OutputMode, ThemeChoice};
use serde::Serialize;
use shelfapp::api::{CmdMessage, MessageLevel};
use shelfapp::index::DisplayBook;
use shelfapp::model::ReadStatus;
use shelfapp::validate::FieldError;

fn render_with_color<T: Serialize>(
    template: &str,
    data: &T,
    theme: ThemeChoice<'_>,
    use_color: bool,
) -> Result<String, outstanding::Error> {
    let mode = if use_color {
        OutputMode::Term
    } else {
        OutputMode::Text
    };
    render_with_output(template, data, theme, mode)
}
use unicode_width::UnicodeWidthStr;

/// Configuration for list rendering.
pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 14;
pub const AUTHOR_WIDTH: usize = 20;
pub const READ_MARK: &str = "✓";
pub const UNREAD_MARK: &str = "·";

/// Semantic card data for template rendering.
///
/// Contains pre-computed layout strings plus the style name the status
/// column should use. Layout math lives here; style selection lives in the
/// template.
#[derive(Serialize)]
struct BookLineData {
    index: String,
    title: String,
    title_pad: String,
    author: String,
    pages: String,
    read_mark: String,
    read_label: String,
    read_style: String,
    token: String,
    time_ago: String,
}

/// Data structure for the full list template.
#[derive(Serialize)]
struct ListData {
    books: Vec<BookLineData>,
    empty: bool,
    empty_message: String,
    help_text: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct FormErrorData {
    field: String,
    message: String,
}

#[derive(Serialize)]
struct FormErrorsData {
    errors: Vec<FormErrorData>,
}

/// Renders the full card list to a string.
pub fn render_book_list(books: &[DisplayBook]) -> String {
    render_book_list_internal(books, None)
}

fn render_book_list_internal(books: &[DisplayBook], use_color: Option<bool>) -> String {
    if books.is_empty() {
        let data = ListData {
            books: vec![],
            empty: true,
            empty_message: "The shelf is empty.".to_string(),
            help_text: "Add a book with `add`; flip or remove one with `toggle <n>` / `delete <n>`."
                .to_string(),
        };
        return render_list_template(&data, use_color);
    }

    // Fixed columns: index, author, pages, status, token, time, plus gaps.
    // Whatever is left belongs to the title.
    let idx_width = 4;
    let pages_width = 7;
    let read_width = 5;
    let token_width = 9;
    let fixed = idx_width + 2 + AUTHOR_WIDTH + 2 + pages_width + 2 + read_width + 2 + token_width
        + TIME_WIDTH;
    let title_avail = LINE_WIDTH.saturating_sub(fixed);

    let lines = books
        .iter()
        .map(|dp| {
            let title_display = truncate_to_width(dp.book.title.as_str(), title_avail);
            let title_pad = " ".repeat(title_avail.saturating_sub(title_display.width()) + 2);

            let author_display = truncate_to_width(dp.book.author.as_str(), AUTHOR_WIDTH);
            let author_pad = " ".repeat(AUTHOR_WIDTH.saturating_sub(author_display.width()));

            let (read_mark, read_style) = match dp.book.read {
                ReadStatus::Read => (READ_MARK, names::READ_MARK),
                ReadStatus::Unread => (UNREAD_MARK, names::UNREAD_MARK),
            };

            BookLineData {
                index: format!("{:>2}. ", dp.index),
                title: title_display,
                title_pad,
                author: format!("{}{}", author_display, author_pad),
                pages: format!("{:>4} pp", dp.book.pages),
                read_mark: read_mark.to_string(),
                read_label: format!("{:<3}", dp.book.read.to_string()),
                read_style: read_style.to_string(),
                token: dp.token(),
                time_ago: format_time_ago(dp.book.added_at),
            }
        })
        .collect();

    let data = ListData {
        books: lines,
        empty: false,
        empty_message: String::new(),
        help_text: String::new(),
    };
    render_list_template(&data, use_color)
}

fn render_list_template(data: &ListData, use_color: Option<bool>) -> String {
    match use_color {
        Some(c) => render_with_color(LIST_TEMPLATE, data, ThemeChoice::from(&*SHELF_THEME), c),
        None => render(LIST_TEMPLATE, data, ThemeChoice::from(&*SHELF_THEME)),
    }
    .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders command messages using the template system with themed styles.
pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, None)
}

fn render_messages_internal(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let message_data: Vec<MessageData> = messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Warning => names::WARNING,
                MessageLevel::Error => names::ERROR,
            };
            MessageData {
                content: msg.content.clone(),
                style: style.to_string(),
            }
        })
        .collect();

    let data = MessagesData {
        messages: message_data,
    };

    match use_color {
        Some(c) => render_with_color(MESSAGES_TEMPLATE, &data, ThemeChoice::from(&*SHELF_THEME), c),
        None => render(MESSAGES_TEMPLATE, &data, ThemeChoice::from(&*SHELF_THEME)),
    }
    .unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

/// Prints command messages to stdout.
pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

/// Renders the validator's field errors, one marked line per offending input.
pub fn render_form_errors(errors: &[FieldError]) -> String {
    render_form_errors_internal(errors, None)
}

fn render_form_errors_internal(errors: &[FieldError], use_color: Option<bool>) -> String {
    let data = FormErrorsData {
        errors: errors
            .iter()
            .map(|e| FormErrorData {
                field: e.field.name().to_string(),
                message: e.to_string(),
            })
            .collect(),
    };

    match use_color {
        Some(c) => render_with_color(
            FORM_ERRORS_TEMPLATE,
            &data,
            ThemeChoice::from(&*SHELF_THEME),
            c,
        ),
        None => render(FORM_ERRORS_TEMPLATE, &data, ThemeChoice::from(&*SHELF_THEME)),
    }
    .unwrap_or_else(|_| {
        errors
            .iter()
            .map(|e| format!("  {}: {}\n", e.field.name(), e))
            .collect()
    })
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    // Right-align so the column lines up regardless of the unit
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfapp::model::Book;

    fn make_book(title: &str, author: &str, pages: u32, read: ReadStatus) -> DisplayBook {
        DisplayBook {
            book: Book::new(title.to_string(), author.to_string(), pages, read),
            index: 1,
        }
    }

    #[test]
    fn test_render_empty_list() {
        let output = render_book_list_internal(&[], Some(false));
        assert!(output.contains("The shelf is empty."));
        assert!(output.contains("Add a book with `add`"));
    }

    #[test]
    fn test_render_single_card() {
        let dp = make_book("The Hobbit", "Tolkien", 295, ReadStatus::Unread);
        let token = dp.token();

        let output = render_book_list_internal(&[dp], Some(false));

        assert!(output.contains(" 1. "));
        assert!(output.contains("The Hobbit"));
        assert!(output.contains("Tolkien"));
        assert!(output.contains("295 pp"));
        assert!(output.contains(UNREAD_MARK));
        assert!(output.contains("No"));
        assert!(output.contains(&token), "card must expose the action token");
    }

    #[test]
    fn test_render_read_book_uses_check_mark() {
        let dp = make_book("Dune", "Herbert", 412, ReadStatus::Read);
        let output = render_book_list_internal(&[dp], Some(false));
        assert!(output.contains(READ_MARK));
        assert!(output.contains("Yes"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let books = vec![
            make_book("The Hobbit", "Tolkien", 295, ReadStatus::Unread),
            DisplayBook {
                book: Book::new("Dune".into(), "Herbert".into(), 412, ReadStatus::Read),
                index: 2,
            },
        ];

        let first = render_book_list_internal(&books, Some(false));
        let second = render_book_list_internal(&books, Some(false));
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_respects_sequence_order() {
        let books = vec![
            make_book("Alpha", "One", 1, ReadStatus::Unread),
            DisplayBook {
                book: Book::new("Beta".into(), "Two".into(), 2, ReadStatus::Unread),
                index: 2,
            },
        ];

        let output = render_book_list_internal(&books, Some(false));
        let alpha = output.find("Alpha").unwrap();
        let beta = output.find("Beta").unwrap();
        assert!(alpha < beta);
    }

    #[test]
    fn test_render_truncates_long_titles() {
        let long = "A".repeat(80);
        let dp = make_book(&long, "Someone", 100, ReadStatus::Unread);
        let output = render_book_list_internal(&[dp], Some(false));
        assert!(!output.contains(&long), "over-wide titles are truncated");
        assert!(output.contains("Someone"), "other columns survive");
    }

    #[test]
    fn test_render_messages_empty() {
        assert!(render_messages(&[]).is_empty());
    }

    #[test]
    fn test_render_messages_levels() {
        let messages = vec![
            CmdMessage::success("Added to shelf: Test"),
            CmdMessage::error("Index 5 not found on the shelf"),
        ];
        let output = render_messages_internal(&messages, Some(false));
        assert!(output.contains("Added to shelf: Test"));
        assert!(output.contains("Index 5 not found on the shelf"));
    }

    #[test]
    fn test_render_form_errors_marks_fields() {
        use shelfapp::validate::{validate, BookForm};

        let errors = validate(&BookForm {
            title: String::new(),
            author: "Tolkien".into(),
            pages: "295".into(),
            read: "No".into(),
        })
        .unwrap_err();

        let output = render_form_errors_internal(&errors, Some(false));
        assert!(output.contains("✗ title: Title is required"));
    }

    #[test]
    fn test_format_time_ago_is_right_aligned() {
        let formatted = format_time_ago(Utc::now());
        assert_eq!(formatted.width(), TIME_WIDTH);
        assert!(formatted.ends_with("now"));
    }
}
