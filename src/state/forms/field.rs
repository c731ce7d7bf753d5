//! Form field descriptors

/// Names of the contact form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Name,
    Email,
    Phone,
    Company,
    InquiryType,
    Message,
}

impl FieldName {
    pub const ALL: [FieldName; 6] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Company,
        FieldName::InquiryType,
        FieldName::Message,
    ];

    /// Wire name of the field (matches the JSON payload keys)
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
            FieldName::Company => "company",
            FieldName::InquiryType => "inquiryType",
            FieldName::Message => "message",
        }
    }
}

/// One entry of a select field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// The control a field renders as
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Textarea,
    Select(Vec<SelectOption>),
}

impl FieldKind {
    pub fn is_multiline(&self) -> bool {
        matches!(self, FieldKind::Textarea)
    }

    pub fn is_select(&self) -> bool {
        matches!(self, FieldKind::Select(_))
    }

    /// Short semantic hint shown next to single-line controls
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            FieldKind::Email => Some("email"),
            FieldKind::Tel => Some("tel"),
            _ => None,
        }
    }
}

/// A single form field with its configuration and current value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub label: String,
    pub kind: FieldKind,
    pub placeholder: Option<String>,
    pub required: bool,
    value: String,
    default_value: String,
}

impl FormField {
    /// Create an empty field of the given kind
    pub fn new(name: FieldName, label: &str, kind: FieldKind) -> Self {
        Self {
            name,
            label: label.to_string(),
            kind,
            placeholder: None,
            required: false,
            value: String::new(),
            default_value: String::new(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the value this field starts with and returns to on reset
    pub fn with_default(mut self, value: &str) -> Self {
        self.default_value = value.to_string();
        self.value = value.to_string();
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: String) {
        self.value = value;
    }

    /// Restore the initial value
    pub fn reset(&mut self) {
        self.value = self.default_value.clone();
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Options of a select field (empty for other kinds)
    pub fn options(&self) -> &[SelectOption] {
        match &self.kind {
            FieldKind::Select(options) => options,
            _ => &[],
        }
    }

    /// Label of the selected option, if the value matches one
    pub fn selected_label(&self) -> Option<&'static str> {
        self.options()
            .iter()
            .find(|o| o.value == self.value)
            .map(|o| o.label)
    }

    /// Value that cycling would select next (wraps; an empty value starts at the first option)
    pub fn cycled_value(&self, forward: bool) -> Option<&'static str> {
        let options = self.options();
        if options.is_empty() {
            return None;
        }
        let current = options.iter().position(|o| o.value == self.value);
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => options.len() - 1,
            (Some(i), true) => (i + 1) % options.len(),
            (Some(0), false) => options.len() - 1,
            (Some(i), false) => i - 1,
        };
        Some(options[next].value)
    }

    /// Placeholder text for an empty value
    pub fn placeholder_text(&self) -> String {
        match (&self.placeholder, &self.kind) {
            (Some(p), _) => p.clone(),
            (None, FieldKind::Select(_)) => format!("Select {}", self.label),
            (None, _) => String::new(),
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.kind {
            FieldKind::Select(_) => self
                .selected_label()
                .map(str::to_string)
                .unwrap_or_else(|| self.value.clone()),
            _ => self.value.clone(),
        }
    }
}
