//! Embedded output templates.
//!
//! Stand-alone template files are easier to edit and diff than string
//! literals, so the sources live in `templates/` and are included at compile
//! time here. Templates are minijinja based; styling goes through the
//! `style` filter against the names registered in [`super::styles`], and any
//! logic beyond simple branching stays in `render.rs`, which passes
//! pre-computed strings in.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const FORM_ERRORS_TEMPLATE: &str = include_str!("templates/form_errors.tmp");
