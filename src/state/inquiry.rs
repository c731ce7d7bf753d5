//! Inquiry domain types shared by the form state and the submission layer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category attached to a contact submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryType {
    #[default]
    General,
    Quote,
    Technical,
    Support,
}

impl InquiryType {
    pub const ALL: [InquiryType; 4] = [
        InquiryType::General,
        InquiryType::Quote,
        InquiryType::Technical,
        InquiryType::Support,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            InquiryType::General => "general",
            InquiryType::Quote => "quote",
            InquiryType::Technical => "technical",
            InquiryType::Support => "support",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InquiryType::General => "General Inquiry",
            InquiryType::Quote => "Request Quote",
            InquiryType::Technical => "Technical Support",
            InquiryType::Support => "Customer Support",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }
}

/// Which embedded form instance an inquiry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormVariant {
    Contact,
    Quote,
}

impl FormVariant {
    pub fn title(&self) -> &'static str {
        match self {
            FormVariant::Contact => "Get In Touch",
            FormVariant::Quote => "Request a Quote",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FormVariant::Contact => {
                "Have questions about our silica gel products? We're here to help."
            }
            FormVariant::Quote => {
                "Tell us about your moisture control needs and we'll provide a custom solution."
            }
        }
    }
}

/// Snapshot of the form's field values
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
    pub inquiry_type: String,
}

/// Payload handed to the submission endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub form: FormVariant,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub message: String,
    pub inquiry_type: InquiryType,
}

impl Inquiry {
    /// Build a payload from validated field values
    pub fn new(form: FormVariant, fields: &ContactFields) -> Self {
        let optional = |s: &str| {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            form,
            name: fields.name.trim().to_string(),
            email: fields.email.trim().to_string(),
            phone: optional(&fields.phone),
            company: optional(&fields.company),
            message: fields.message.trim().to_string(),
            inquiry_type: InquiryType::from_value(&fields.inquiry_type).unwrap_or_default(),
        }
    }
}
