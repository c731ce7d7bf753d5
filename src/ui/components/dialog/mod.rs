//! Dialog components for TUI

mod base;
mod error_dialog;

pub(crate) use base::wrap_text;
pub use error_dialog::render_error_dialog;
