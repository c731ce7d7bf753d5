//! Form domain layer
//!
//! Field descriptors, validation rules and the submit state machine
//! behind both embedded contact forms.

mod field;
mod form_state;
mod validation;

pub use field::{FieldKind, FieldName, FormField};
pub use form_state::{ContactForm, Form, FormButton, SubmitAttempt, SubmitStatus};
