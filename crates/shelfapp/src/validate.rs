//! Add-form validation for shelf.
//!
//! The form arrives as four raw strings (title, author, pages, read). This
//! module is the single gatekeeper between raw input and a [`Book`] record:
//! it either produces a normalized [`NewBook`] or an aggregated list of
//! field-level errors for the UI to attach to the offending inputs.
//!
//! Rules:
//! - title/author: required; letters (ASCII or the Latin-1 supplement,
//!   `À`–`ÿ`), whitespace, hyphens, and apostrophes only
//! - pages: required; must parse as an integer strictly greater than zero
//! - read: a closed choice, parsed leniently and never in error
//!
//! Each field carries at most one error (required-ness is checked before
//! shape), and overall validity is true iff no field is in error.

use crate::model::{NewBook, ReadStatus};

/// The raw add-form fields, exactly as the user typed them.
#[derive(Debug, Clone, Default)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub pages: String,
    pub read: String,
}

/// The form fields that can be in error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    Title,
    Author,
    Pages,
}

impl FormField {
    /// Lowercase name, used to mark the offending input in the UI.
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Author => "author",
            FormField::Pages => "pages",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Author => "Author",
            FormField::Pages => "Pages",
        }
    }
}

/// The kinds of validation failure a field can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// The field was empty (after trimming).
    RequiredField,
    /// The field contains characters outside the allowed name alphabet.
    InvalidCharacters,
    /// The field does not parse as an integer greater than zero.
    NotPositiveInteger,
}

/// One validation failure, attached to one named input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub kind: FieldErrorKind,
}

impl FieldError {
    fn new(field: FormField, kind: FieldErrorKind) -> Self {
        Self { field, kind }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            FieldErrorKind::RequiredField => {
                write!(f, "{} is required", self.field.label())
            }
            FieldErrorKind::InvalidCharacters => {
                write!(
                    f,
                    "{} can only contain letters, spaces, hyphens, and apostrophes",
                    self.field.label()
                )
            }
            FieldErrorKind::NotPositiveInteger => {
                write!(f, "{} must be a positive number", self.field.label())
            }
        }
    }
}

impl std::error::Error for FieldError {}

/// Validates the raw form and, on success, returns the normalized record
/// fields ready for [`crate::model::Book::new`].
///
/// All field errors are aggregated into one result; the form is valid iff
/// the error list would be empty.
///
/// # Examples
/// ```
/// use shelfapp::validate::{validate, BookForm};
///
/// let form = BookForm {
///     title: "The Hobbit".into(),
///     author: "Tolkien".into(),
///     pages: "295".into(),
///     read: "No".into(),
/// };
/// assert!(validate(&form).is_ok());
///
/// let form = BookForm {
///     title: "Hobbit3".into(),
///     author: "".into(),
///     pages: "-5".into(),
///     read: "No".into(),
/// };
/// let errors = validate(&form).unwrap_err();
/// assert_eq!(errors.len(), 3);
/// ```
pub fn validate(form: &BookForm) -> std::result::Result<NewBook, Vec<FieldError>> {
    let mut errors = Vec::new();

    let title = form.title.trim();
    if title.is_empty() {
        errors.push(FieldError::new(FormField::Title, FieldErrorKind::RequiredField));
    } else if !is_valid_name(title) {
        errors.push(FieldError::new(FormField::Title, FieldErrorKind::InvalidCharacters));
    }

    let author = form.author.trim();
    if author.is_empty() {
        errors.push(FieldError::new(FormField::Author, FieldErrorKind::RequiredField));
    } else if !is_valid_name(author) {
        errors.push(FieldError::new(FormField::Author, FieldErrorKind::InvalidCharacters));
    }

    let pages_raw = form.pages.trim();
    let mut pages = None;
    if pages_raw.is_empty() {
        errors.push(FieldError::new(FormField::Pages, FieldErrorKind::RequiredField));
    } else {
        match pages_raw.parse::<u32>() {
            Ok(n) if n > 0 => pages = Some(n),
            _ => errors.push(FieldError::new(
                FormField::Pages,
                FieldErrorKind::NotPositiveInteger,
            )),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewBook {
        title: title.to_string(),
        author: author.to_string(),
        // Guarded by the error check above
        pages: pages.unwrap_or_default(),
        read: ReadStatus::from_input(&form.read),
    })
}

fn is_valid_name(s: &str) -> bool {
    s.chars().all(is_valid_name_char)
}

/// The name alphabet: letters (ASCII plus Latin-1 supplement), whitespace,
/// hyphens, apostrophes.
fn is_valid_name_char(ch: char) -> bool {
    ch.is_ascii_alphabetic()
        || ('\u{00C0}'..='\u{00FF}').contains(&ch)
        || ch.is_whitespace()
        || ch == '-'
        || ch == '\''
}
