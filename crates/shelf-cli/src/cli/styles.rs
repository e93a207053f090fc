//! Styles for the shelf CLI.
//!
//! Shelf uses the `outstanding` crate for theming: templates reference
//! semantic style names and the theme maps those names to `console` styles.
//! The CLI needs to work equally well in light and dark terminals, so
//! `SHELF_THEME` exposes an adaptive theme with a palette for each. All of
//! the styles are registered once through `once_cell::sync::Lazy`.
//!
//! Shared tokens:
//! - Muted text (authors, page counts, metadata)
//! - Faint text (hints, the empty-shelf help)
//! - Time text (muted + italic, the "added … ago" column)
//! - Token text (the `#9f3c21e8` action tokens)
//! - Read / unread marks (the status column)
//! - Message levels (info, success, warning, error)

use console::Style;
use once_cell::sync::Lazy;
use outstanding::{rgb_to_ansi256, AdaptiveTheme, Theme};

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const MUTED: &str = "muted";
    pub const FAINT: &str = "faint";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
    pub const TIME: &str = "time";
    pub const TOKEN: &str = "token";
    pub const FIELD: &str = "field";
    // Semantic list styles
    pub const LIST_INDEX: &str = "list-index";
    pub const LIST_TITLE: &str = "list-title";
    pub const READ_MARK: &str = "read-mark";
    pub const UNREAD_MARK: &str = "unread-mark";
}

/// The adaptive theme for shelf, containing both light and dark variants.
pub static SHELF_THEME: Lazy<AdaptiveTheme> =
    Lazy::new(|| AdaptiveTheme::new(build_light_theme(), build_dark_theme()));

fn build_light_theme() -> Theme {
    let regular = Style::new().black();
    let muted = Style::new().color256(rgb_to_ansi256((115, 115, 115)));
    let faint = Style::new().color256(rgb_to_ansi256((173, 173, 173)));
    let warning = Style::new().yellow().bold();
    let error = Style::new().red().bold();
    let success = Style::new().green();
    let info = muted.clone();
    let time = muted.clone().italic();
    let token = Style::new().color256(rgb_to_ansi256((0, 95, 135)));
    let field = Style::new().black().bold();
    let list_index = Style::new().color256(rgb_to_ansi256((196, 140, 0)));
    let list_title = regular.clone();
    let read_mark = Style::new().color256(rgb_to_ansi256((0, 128, 0)));
    let unread_mark = faint.clone();

    Theme::new()
        .add(names::MUTED, muted)
        .add(names::FAINT, faint)
        .add(names::ERROR, error)
        .add(names::WARNING, warning)
        .add(names::SUCCESS, success)
        .add(names::INFO, info)
        .add(names::TIME, time)
        .add(names::TOKEN, token)
        .add(names::FIELD, field)
        .add(names::LIST_INDEX, list_index)
        .add(names::LIST_TITLE, list_title)
        .add(names::READ_MARK, read_mark)
        .add(names::UNREAD_MARK, unread_mark)
}

fn build_dark_theme() -> Theme {
    let regular = Style::new().white();
    let muted = Style::new().color256(rgb_to_ansi256((180, 180, 180)));
    let faint = Style::new().color256(rgb_to_ansi256((110, 110, 110)));
    let warning = Style::new().yellow().bold();
    let error = Style::new().red().bold();
    let success = Style::new().green();
    let info = muted.clone();
    let time = muted.clone().italic();
    let token = Style::new().color256(rgb_to_ansi256((102, 187, 255)));
    let field = Style::new().white().bold();
    let list_index = Style::new().color256(rgb_to_ansi256((255, 214, 10)));
    let list_title = regular.clone();
    let read_mark = Style::new().color256(rgb_to_ansi256((144, 238, 144)));
    let unread_mark = faint.clone();

    Theme::new()
        .add(names::MUTED, muted)
        .add(names::FAINT, faint)
        .add(names::ERROR, error)
        .add(names::WARNING, warning)
        .add(names::SUCCESS, success)
        .add(names::INFO, info)
        .add(names::TIME, time)
        .add(names::TOKEN, token)
        .add(names::FIELD, field)
        .add(names::LIST_INDEX, list_index)
        .add(names::LIST_TITLE, list_title)
        .add(names::READ_MARK, read_mark)
        .add(names::UNREAD_MARK, unread_mark)
}
