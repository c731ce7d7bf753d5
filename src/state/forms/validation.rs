//! Field validation for the contact form

use super::field::FieldName;
use crate::state::ContactFields;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Minimum trimmed message length, in characters
pub const MIN_MESSAGE_LEN: usize = 10;

const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 7..=15;

/// True iff `s` looks like `local@domain.tld` with no whitespace
pub fn validate_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

/// True iff `s` is 7-15 digits once spaces, hyphens, parentheses and one leading `+` are removed
pub fn validate_phone(s: &str) -> bool {
    let stripped: String = s
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();
    let digits = stripped.strip_prefix('+').unwrap_or(&stripped);

    PHONE_DIGITS.contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

/// Per-field validation messages; a missing entry means the field is valid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<FieldName, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    #[cfg(test)]
    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    /// Drop the message for one field, returning whether there was one
    pub fn clear_field(&mut self, field: FieldName) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Run every rule against the field values. Empty result means the form can be sent.
pub fn validate_contact(fields: &ContactFields) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if fields.name.trim().is_empty() {
        errors.insert(FieldName::Name, "Name is required");
    }

    if fields.email.trim().is_empty() {
        errors.insert(FieldName::Email, "Email is required");
    } else if !validate_email(&fields.email) {
        errors.insert(FieldName::Email, "Please enter a valid email address");
    }

    let message = fields.message.trim();
    if message.is_empty() {
        errors.insert(FieldName::Message, "Message is required");
    } else if message.chars().count() < MIN_MESSAGE_LEN {
        errors.insert(
            FieldName::Message,
            "Message must be at least 10 characters long",
        );
    }

    // Phone is optional
    if !fields.phone.is_empty() && !validate_phone(&fields.phone) {
        errors.insert(FieldName::Phone, "Please enter a valid phone number");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    mod email {
        use super::*;

        #[test]
        fn test_canonical_address_is_valid() {
            assert!(validate_email("john@company.com"));
            assert!(validate_email("first.last+tag@sub.example.co.uk"));
        }

        #[test]
        fn test_missing_at_is_invalid() {
            assert!(!validate_email("john.company.com"));
            assert!(!validate_email(""));
        }

        #[test]
        fn test_domain_without_dot_is_invalid() {
            assert!(!validate_email("john@company"));
            assert!(!validate_email("first.last@localhost"));
        }

        #[test]
        fn test_empty_local_part_is_invalid() {
            assert!(!validate_email("@company.com"));
        }

        #[test]
        fn test_whitespace_is_invalid() {
            assert!(!validate_email("john doe@company.com"));
            assert!(!validate_email("john@comp any.com"));
            assert!(!validate_email(" john@company.com"));
        }

        #[test]
        fn test_double_at_is_invalid() {
            assert!(!validate_email("john@@company.com"));
            assert!(!validate_email("a@b@company.com"));
        }
    }

    mod phone {
        use super::*;

        #[test]
        fn test_digit_lengths_in_range_are_valid() {
            for n in 7..=15 {
                let s = "5".repeat(n);
                assert!(validate_phone(&s), "{n} digits should be valid");
            }
        }

        #[test]
        fn test_digit_lengths_out_of_range_are_invalid() {
            for n in (1..7).chain(16..20) {
                let s = "5".repeat(n);
                assert!(!validate_phone(&s), "{n} digits should be invalid");
            }
        }

        #[test]
        fn test_formatting_characters_are_stripped() {
            assert!(validate_phone("(555) 123-4567"));
            assert!(validate_phone("+1 (555) 123-4567"));
            assert!(validate_phone("+44 20 7946 0958"));
        }

        #[test]
        fn test_letters_are_invalid() {
            assert!(!validate_phone("555-CALL-NOW"));
            assert!(!validate_phone("555.123.4567"));
        }

        #[test]
        fn test_plus_only_allowed_once_at_start() {
            assert!(!validate_phone("++15551234567"));
            assert!(!validate_phone("555+1234567"));
        }

        #[test]
        fn test_empty_is_invalid() {
            assert!(!validate_phone(""));
            assert!(!validate_phone("+"));
        }
    }

    mod contact {
        use super::*;
        use pretty_assertions::assert_eq;

        fn valid_fields() -> ContactFields {
            ContactFields {
                name: "John".to_string(),
                email: "john@x.com".to_string(),
                message: "This is a sufficiently long message.".to_string(),
                inquiry_type: "general".to_string(),
                ..Default::default()
            }
        }

        #[test]
        fn test_valid_fields_produce_no_errors() {
            assert!(validate_contact(&valid_fields()).is_empty());
        }

        #[test]
        fn test_all_failures_accumulate() {
            let fields = ContactFields {
                name: String::new(),
                email: "bad".to_string(),
                message: "short".to_string(),
                ..Default::default()
            };
            let errors = validate_contact(&fields);

            assert_eq!(errors.len(), 3);
            assert_eq!(errors.get(FieldName::Name), Some("Name is required"));
            assert_eq!(
                errors.get(FieldName::Email),
                Some("Please enter a valid email address")
            );
            assert_eq!(
                errors.get(FieldName::Message),
                Some("Message must be at least 10 characters long")
            );
        }

        #[test]
        fn test_whitespace_only_counts_as_empty() {
            let fields = ContactFields {
                name: "   ".to_string(),
                email: "\t".to_string(),
                message: "  \n ".to_string(),
                ..Default::default()
            };
            let errors = validate_contact(&fields);
            assert_eq!(errors.get(FieldName::Email), Some("Email is required"));
            assert_eq!(errors.get(FieldName::Message), Some("Message is required"));
        }

        #[test]
        fn test_message_length_uses_trimmed_chars() {
            let mut fields = valid_fields();
            fields.message = "   123456789   ".to_string();
            assert!(validate_contact(&fields).contains(FieldName::Message));
            fields.message = "éééééééééé".to_string();
            assert!(!validate_contact(&fields).contains(FieldName::Message));
        }

        #[test]
        fn test_invalid_phone_is_reported_only_when_present() {
            let mut fields = valid_fields();
            fields.phone = "12".to_string();
            assert_eq!(
                validate_contact(&fields).get(FieldName::Phone),
                Some("Please enter a valid phone number")
            );
            fields.phone = String::new();
            assert!(validate_contact(&fields).is_empty());
        }

        #[test]
        fn test_company_and_inquiry_type_are_never_validated() {
            let mut fields = valid_fields();
            fields.company = String::new();
            fields.inquiry_type = String::new();
            assert!(validate_contact(&fields).is_empty());
        }

        #[test]
        fn test_clear_field_only_touches_one_entry() {
            let mut errors = ValidationErrors::new();
            errors.insert(FieldName::Name, "Name is required");
            errors.insert(FieldName::Email, "Email is required");
            assert!(errors.clear_field(FieldName::Name));
            assert!(!errors.clear_field(FieldName::Name));
            assert_eq!(errors.get(FieldName::Email), Some("Email is required"));
        }
    }
}
