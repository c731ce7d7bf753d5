//! Form rendering module
//!
//! - `field_renderer`: one bordered field with its error line
//! - `contact_form`: the full contact/quote form with status banner and buttons

mod contact_form;
mod field_renderer;

pub use contact_form::draw as draw_contact_form;
