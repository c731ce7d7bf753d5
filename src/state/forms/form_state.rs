//! Contact form state machine

use super::field::{FieldKind, FieldName, FormField, SelectOption};
use super::validation::{validate_contact, ValidationErrors};
use crate::state::{ContactFields, FormVariant, Inquiry, InquiryType};
use std::fmt::Display;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Lifecycle of one submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Result of asking the form to submit
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAttempt {
    /// Validation passed; the payload must be handed to the submitter
    Accepted(Inquiry),
    /// Validation failed; errors were stored on the form
    Rejected,
    /// A submission is already in flight
    Ignored,
}

/// Buttons on the last row of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Send,
    Clear,
}

impl FormButton {
    pub fn toggle(&self) -> Self {
        match self {
            FormButton::Send => FormButton::Clear,
            FormButton::Clear => FormButton::Send,
        }
    }
}

/// Contact form: field values, validation errors and submission status
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub variant: FormVariant,
    fields: Vec<FormField>,
    errors: ValidationErrors,
    status: SubmitStatus,
    pub active_field_index: usize,
    pub selected_button: FormButton,
}

impl ContactForm {
    pub fn new(variant: FormVariant) -> Self {
        let inquiry_options = InquiryType::ALL
            .iter()
            .map(|t| SelectOption {
                value: t.value(),
                label: t.label(),
            })
            .collect();

        // Order must match FieldName::ALL
        let fields = vec![
            FormField::new(FieldName::Name, "Full Name", FieldKind::Text)
                .with_placeholder("John Doe")
                .required(),
            FormField::new(FieldName::Email, "Email Address", FieldKind::Email)
                .with_placeholder("john@company.com")
                .required(),
            FormField::new(FieldName::Phone, "Phone Number", FieldKind::Tel)
                .with_placeholder("(555) 123-4567"),
            FormField::new(FieldName::Company, "Company", FieldKind::Text)
                .with_placeholder("Your Company Name"),
            FormField::new(
                FieldName::InquiryType,
                "Inquiry Type",
                FieldKind::Select(inquiry_options),
            )
            .with_default(InquiryType::default().value())
            .required(),
            FormField::new(FieldName::Message, "Message", FieldKind::Textarea)
                .with_placeholder(
                    "Tell us about your moisture control needs, required specifications, \
                     or any questions you have...",
                )
                .required(),
        ];

        Self {
            variant,
            fields,
            errors: ValidationErrors::new(),
            status: SubmitStatus::Idle,
            active_field_index: 0,
            selected_button: FormButton::Send,
        }
    }

    #[cfg(test)]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        &self.fields[Self::index_of(name)]
    }

    fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        &mut self.fields[Self::index_of(name)]
    }

    fn index_of(name: FieldName) -> usize {
        FieldName::ALL
            .iter()
            .position(|n| *n == name)
            .unwrap_or_default()
    }

    pub fn value(&self, name: FieldName) -> &str {
        self.field(name).value()
    }

    #[cfg(test)]
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, name: FieldName) -> Option<&str> {
        self.errors.get(name)
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Submit, clear and field inputs are only live outside a submission
    pub fn controls_enabled(&self) -> bool {
        !self.is_submitting()
    }

    /// Snapshot of the current values
    pub fn values(&self) -> ContactFields {
        ContactFields {
            name: self.value(FieldName::Name).to_string(),
            email: self.value(FieldName::Email).to_string(),
            phone: self.value(FieldName::Phone).to_string(),
            company: self.value(FieldName::Company).to_string(),
            message: self.value(FieldName::Message).to_string(),
            inquiry_type: self.value(FieldName::InquiryType).to_string(),
        }
    }

    /// Replace a field's value and drop its stale error. No-op while submitting.
    pub fn set_value(&mut self, name: FieldName, value: impl Into<String>) -> bool {
        self.edit(name, |field| field.set_value(value.into()))
    }

    fn edit(&mut self, name: FieldName, change: impl FnOnce(&mut FormField)) -> bool {
        if self.is_submitting() {
            return false;
        }
        change(self.field_mut(name));
        self.errors.clear_field(name);
        true
    }

    /// Field under the cursor (None on the buttons row)
    pub fn active_form_field(&self) -> Option<&FormField> {
        self.fields.get(self.active_field_index)
    }

    fn active_name(&self) -> Option<FieldName> {
        self.active_form_field().map(|f| f.name)
    }

    /// Type a character into the active field. Select fields ignore typing.
    pub fn input_char(&mut self, c: char) -> bool {
        match self.active_form_field() {
            Some(field) if !field.kind.is_select() => {
                let name = field.name;
                self.edit(name, |f| f.push_char(c))
            }
            _ => false,
        }
    }

    pub fn backspace(&mut self) -> bool {
        match self.active_form_field() {
            Some(field) if !field.kind.is_select() => {
                let name = field.name;
                self.edit(name, FormField::pop_char)
            }
            _ => false,
        }
    }

    /// Insert a line break; only multi-line fields accept one
    pub fn newline(&mut self) -> bool {
        match self.active_form_field() {
            Some(field) if field.kind.is_multiline() => {
                let name = field.name;
                self.edit(name, |f| f.push_char('\n'))
            }
            _ => false,
        }
    }

    /// Step the active select field to the next or previous option
    pub fn cycle_option(&mut self, forward: bool) -> bool {
        let Some(name) = self.active_name() else {
            return false;
        };
        match self.field(name).cycled_value(forward) {
            Some(value) => self.set_value(name, value),
            None => false,
        }
    }

    /// Validate and, if acceptable, move to `Submitting`
    pub fn attempt_submit(&mut self) -> SubmitAttempt {
        if self.is_submitting() {
            return SubmitAttempt::Ignored;
        }

        let values = self.values();
        let errors = validate_contact(&values);
        if !errors.is_empty() {
            tracing::debug!(
                form = ?self.variant,
                fields = ?errors.iter().map(|(f, _)| f.as_str()).collect::<Vec<_>>(),
                "Contact form rejected by validation"
            );
            self.errors = errors;
            return SubmitAttempt::Rejected;
        }

        self.errors.clear();
        self.status = SubmitStatus::Submitting;
        SubmitAttempt::Accepted(Inquiry::new(self.variant, &values))
    }

    /// Apply the outcome of the in-flight submission.
    /// Returns false when nothing was in flight.
    pub fn resolve<E: Display>(&mut self, result: &Result<(), E>) -> bool {
        if !self.is_submitting() {
            tracing::warn!(form = ?self.variant, "Discarding submission outcome with nothing in flight");
            return false;
        }

        match result {
            Ok(()) => {
                self.reset_fields();
                self.status = SubmitStatus::Success;
            }
            Err(e) => {
                tracing::warn!(form = ?self.variant, error = %e, "Inquiry submission failed");
                self.status = SubmitStatus::Error;
            }
        }
        true
    }

    /// Reset values and errors back to `Idle`. Refused mid-submission.
    pub fn clear(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.reset_fields();
        self.errors.clear();
        self.status = SubmitStatus::Idle;
        self.active_field_index = 0;
        self.selected_button = FormButton::Send;
        true
    }

    fn reset_fields(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == self.fields.len()
    }

    pub fn toggle_button(&mut self) {
        self.selected_button = self.selected_button.toggle();
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        self.fields.len() + 1 // fields + buttons row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_valid(form: &mut ContactForm) {
        form.set_value(FieldName::Name, "John");
        form.set_value(FieldName::Email, "john@x.com");
        form.set_value(FieldName::Message, "This is a sufficiently long message.");
    }

    fn submitting_form() -> ContactForm {
        let mut form = ContactForm::new(FormVariant::Contact);
        fill_valid(&mut form);
        assert!(matches!(form.attempt_submit(), SubmitAttempt::Accepted(_)));
        form
    }

    mod defaults {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_form_is_idle_and_empty() {
            let form = ContactForm::new(FormVariant::Contact);
            assert_eq!(form.status(), SubmitStatus::Idle);
            assert!(form.errors().is_empty());
            assert_eq!(
                form.values(),
                ContactFields {
                    inquiry_type: "general".to_string(),
                    ..Default::default()
                }
            );
        }

        #[test]
        fn test_fields_follow_name_order() {
            let form = ContactForm::new(FormVariant::Quote);
            let names: Vec<_> = form.fields().iter().map(|f| f.name).collect();
            assert_eq!(names, FieldName::ALL.to_vec());
        }

        #[test]
        fn test_required_markers() {
            let form = ContactForm::new(FormVariant::Contact);
            assert!(form.field(FieldName::Name).required);
            assert!(form.field(FieldName::Message).required);
            assert!(!form.field(FieldName::Phone).required);
            assert!(!form.field(FieldName::Company).required);
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_edit_clears_only_that_fields_error() {
            let mut form = ContactForm::new(FormVariant::Contact);
            form.set_value(FieldName::Email, "bad");
            assert_eq!(form.attempt_submit(), SubmitAttempt::Rejected);
            assert!(form.error(FieldName::Name).is_some());
            assert!(form.error(FieldName::Email).is_some());
            assert!(form.error(FieldName::Message).is_some());

            form.set_value(FieldName::Email, "still-bad");

            assert!(form.error(FieldName::Email).is_none());
            assert_eq!(form.error(FieldName::Name), Some("Name is required"));
            assert_eq!(form.error(FieldName::Message), Some("Message is required"));
        }

        #[test]
        fn test_typing_goes_to_active_field() {
            let mut form = ContactForm::new(FormVariant::Contact);
            form.set_active_field(1);
            for c in "a@b.co".chars() {
                assert!(form.input_char(c));
            }
            form.backspace();
            assert_eq!(form.value(FieldName::Email), "a@b.c");
        }

        #[test]
        fn test_typing_into_select_is_ignored() {
            let mut form = ContactForm::new(FormVariant::Contact);
            form.set_active_field(4);
            assert!(!form.input_char('x'));
            assert!(!form.backspace());
            assert_eq!(form.value(FieldName::InquiryType), "general");
        }

        #[test]
        fn test_cycle_option_walks_inquiry_types() {
            let mut form = ContactForm::new(FormVariant::Contact);
            form.set_active_field(4);
            assert!(form.cycle_option(true));
            assert_eq!(form.value(FieldName::InquiryType), "quote");
            assert!(form.cycle_option(false));
            assert!(form.cycle_option(false));
            assert_eq!(form.value(FieldName::InquiryType), "support");
        }

        #[test]
        fn test_newline_only_in_message() {
            let mut form = ContactForm::new(FormVariant::Contact);
            assert!(!form.newline());
            form.set_active_field(5);
            assert!(form.newline());
            assert_eq!(form.value(FieldName::Message), "\n");
        }

        #[test]
        fn test_edits_refused_while_submitting() {
            let mut form = submitting_form();
            assert!(!form.set_value(FieldName::Name, "Jane"));
            form.set_active_field(0);
            assert!(!form.input_char('x'));
            assert_eq!(form.value(FieldName::Name), "John");
        }

        #[test]
        fn test_edit_keeps_success_status() {
            let mut form = submitting_form();
            form.resolve::<String>(&Ok(()));
            form.set_value(FieldName::Name, "Jane");
            assert_eq!(form.status(), SubmitStatus::Success);
        }
    }

    mod submitting {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_invalid_submit_stays_in_current_status() {
            let mut form = ContactForm::new(FormVariant::Contact);
            form.set_value(FieldName::Email, "bad");
            form.set_value(FieldName::Message, "short");

            assert_eq!(form.attempt_submit(), SubmitAttempt::Rejected);

            assert_eq!(form.status(), SubmitStatus::Idle);
            assert_eq!(form.errors().len(), 3);
            assert_eq!(
                form.error(FieldName::Email),
                Some("Please enter a valid email address")
            );
            assert_eq!(
                form.error(FieldName::Message),
                Some("Message must be at least 10 characters long")
            );
        }

        #[test]
        fn test_invalid_submit_after_error_keeps_error_status() {
            let mut form = submitting_form();
            form.resolve(&Err("boom"));
            form.set_value(FieldName::Email, "nope");
            assert_eq!(form.attempt_submit(), SubmitAttempt::Rejected);
            assert_eq!(form.status(), SubmitStatus::Error);
        }

        #[test]
        fn test_valid_submit_enters_submitting_with_payload() {
            let mut form = ContactForm::new(FormVariant::Quote);
            fill_valid(&mut form);

            let SubmitAttempt::Accepted(inquiry) = form.attempt_submit() else {
                panic!("expected submission to be accepted");
            };

            assert_eq!(form.status(), SubmitStatus::Submitting);
            assert!(form.errors().is_empty());
            assert!(!form.controls_enabled());
            assert_eq!(inquiry.name, "John");
            assert_eq!(inquiry.form, FormVariant::Quote);
            assert_eq!(inquiry.phone, None);
        }

        #[test]
        fn test_second_submit_is_ignored() {
            let mut form = submitting_form();
            assert_eq!(form.attempt_submit(), SubmitAttempt::Ignored);
            assert_eq!(form.status(), SubmitStatus::Submitting);
        }

        #[test]
        fn test_success_resets_fields() {
            let mut form = submitting_form();
            form.set_active_field(2);
            assert!(form.resolve::<String>(&Ok(())));
            assert_eq!(form.status(), SubmitStatus::Success);
            assert_eq!(form.value(FieldName::Name), "");
            assert_eq!(form.value(FieldName::InquiryType), "general");
        }

        #[test]
        fn test_failure_keeps_fields() {
            let mut form = submitting_form();
            assert!(form.resolve(&Err("connection refused")));
            assert_eq!(form.status(), SubmitStatus::Error);
            assert_eq!(form.value(FieldName::Name), "John");
            assert!(form.controls_enabled());
        }

        #[test]
        fn test_resolve_without_submission_is_discarded() {
            let mut form = ContactForm::new(FormVariant::Contact);
            assert!(!form.resolve::<String>(&Ok(())));
            assert_eq!(form.status(), SubmitStatus::Idle);
        }

        #[test]
        fn test_retry_after_error() {
            let mut form = submitting_form();
            form.resolve(&Err("timeout"));
            assert!(matches!(form.attempt_submit(), SubmitAttempt::Accepted(_)));
            assert_eq!(form.status(), SubmitStatus::Submitting);
        }
    }

    mod clearing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_clear_after_success_returns_to_idle() {
            let mut form = submitting_form();
            form.resolve::<String>(&Ok(()));
            form.set_value(FieldName::Company, "Acme");
            assert!(form.clear());
            assert_eq!(form.status(), SubmitStatus::Idle);
            assert_eq!(form.value(FieldName::Company), "");
        }

        #[test]
        fn test_clear_after_error_resets_fields_and_errors() {
            let mut form = submitting_form();
            form.resolve(&Err("500"));
            form.set_value(FieldName::Email, "bad");
            form.attempt_submit();
            assert!(!form.errors().is_empty());

            assert!(form.clear());

            assert_eq!(form.status(), SubmitStatus::Idle);
            assert!(form.errors().is_empty());
            assert_eq!(form.value(FieldName::Name), "");
            assert_eq!(form.value(FieldName::InquiryType), "general");
        }

        #[test]
        fn test_clear_refused_while_submitting() {
            let mut form = submitting_form();
            assert!(!form.clear());
            assert_eq!(form.status(), SubmitStatus::Submitting);
            assert_eq!(form.value(FieldName::Name), "John");
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_field_count_includes_buttons_row() {
            let form = ContactForm::new(FormVariant::Contact);
            assert_eq!(form.field_count(), 7);
        }

        #[test]
        fn test_next_field_wraps() {
            let mut form = ContactForm::new(FormVariant::Contact);
            for _ in 0..7 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_buttons() {
            let mut form = ContactForm::new(FormVariant::Contact);
            form.prev_field();
            assert!(form.is_buttons_row_active());
            assert!(form.active_form_field().is_none());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = ContactForm::new(FormVariant::Contact);
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 6);
        }

        #[test]
        fn test_toggle_button() {
            let mut form = ContactForm::new(FormVariant::Contact);
            assert_eq!(form.selected_button, FormButton::Send);
            form.toggle_button();
            assert_eq!(form.selected_button, FormButton::Clear);
        }
    }
}
