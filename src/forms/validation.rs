use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::SiteError;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// ASCII digits only, matching the browser's `\d`
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+]?[0-9\s\-\(\)]{10,}$").unwrap());

static FLOAT_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)").unwrap()
});

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_MESSAGE_LEN: usize = 10;

/// Every form control the site validates, addressed by its DOM id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Message,
    ClientName,
    ClientEmail,
    ClientPhone,
    ServiceType,
    Amount,
    Description,
}

impl FieldId {
    pub const CONTACT: [FieldId; 4] = [FieldId::Name, FieldId::Email, FieldId::Phone, FieldId::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Message => "message",
            FieldId::ClientName => "client-name",
            FieldId::ClientEmail => "client-email",
            FieldId::ClientPhone => "client-phone",
            FieldId::ServiceType => "service-type",
            FieldId::Amount => "amount",
            FieldId::Description => "description",
        }
    }

    /// Id of the inline error element paired with this control.
    pub fn error_id(&self) -> String {
        format!("{}-error", self.as_str())
    }

    /// Maps a control's `name` attribute back to the field, for blur handlers.
    pub fn from_name(name: &str) -> Option<FieldId> {
        [
            FieldId::Name,
            FieldId::Email,
            FieldId::Phone,
            FieldId::Message,
            FieldId::ClientName,
            FieldId::ClientEmail,
            FieldId::ClientPhone,
            FieldId::ServiceType,
            FieldId::Amount,
            FieldId::Description,
        ]
        .into_iter()
        .find(|field| field.as_str() == name)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Name,
    Email,
    Phone,
    Message,
    Required,
    Amount,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: Option<String>,
}

impl ValidationResult {
    fn pass() -> Self {
        Self { valid: true, message: None }
    }

    fn fail(message: &str) -> Self {
        Self {
            valid: false,
            message: Some(message.to_string()),
        }
    }

    pub fn into_error(self, field: FieldId) -> Option<SiteError> {
        if self.valid {
            return None;
        }
        Some(SiteError::FieldInvalid {
            field,
            message: self.message.unwrap_or_default(),
        })
    }
}

pub fn validate(kind: FieldKind, value: &str) -> ValidationResult {
    let trimmed = value.trim();
    match kind {
        FieldKind::Name => {
            if trimmed.is_empty() {
                ValidationResult::fail("Name is required")
            } else if trimmed.chars().count() < MIN_NAME_LEN {
                ValidationResult::fail("Name must be at least 2 characters")
            } else {
                ValidationResult::pass()
            }
        }
        FieldKind::Email => {
            if trimmed.is_empty() {
                ValidationResult::fail("Email is required")
            } else if !EMAIL_REGEX.is_match(value) {
                ValidationResult::fail("Please enter a valid email address")
            } else {
                ValidationResult::pass()
            }
        }
        FieldKind::Phone => {
            if trimmed.is_empty() {
                ValidationResult::fail("Phone number is required")
            } else if !PHONE_REGEX.is_match(value) {
                ValidationResult::fail("Please enter a valid phone number")
            } else {
                ValidationResult::pass()
            }
        }
        FieldKind::Message => {
            if trimmed.is_empty() {
                ValidationResult::fail("Message is required")
            } else if trimmed.chars().count() < MIN_MESSAGE_LEN {
                ValidationResult::fail("Message must be at least 10 characters")
            } else {
                ValidationResult::pass()
            }
        }
        FieldKind::Required => {
            if trimmed.is_empty() {
                ValidationResult::fail("This field is required")
            } else {
                ValidationResult::pass()
            }
        }
        FieldKind::Amount => match parse_float(value) {
            Some(amount) if amount.is_finite() && amount > 0.0 => ValidationResult::pass(),
            _ => ValidationResult::fail("Please enter a valid amount"),
        },
    }
}

/// Reads the leading number of `raw` the way a browser's `parseFloat` does:
/// `"12abc"` is 12, `" .5"` is 0.5, `"abc"` is `None`.
pub fn parse_float(raw: &str) -> Option<f64> {
    let text = FLOAT_PREFIX.find(raw.trim_start())?.as_str();
    text.parse::<f64>().ok()
}
