//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_button, render_cta_button, BUTTON_HEIGHT};
pub(crate) use dialog::wrap_text;
pub use dialog::render_error_dialog;
