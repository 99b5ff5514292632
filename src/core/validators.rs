//! Field validators for the lead form.
//!
//! Every validator is total: it never panics and never performs I/O. `Ok(())`
//! means the raw value is acceptable, otherwise the returned [`FieldError`]
//! renders the message shown next to the input.

use crate::core::formatter::format_phone;
use crate::domain::model::Field;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_PHONE_DIGITS: usize = 10;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s'-]+$").expect("name pattern compiles"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?\(?[0-9]{3}\)?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}$")
        .expect("phone pattern compiles")
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{} is required", .0.label())]
    Required(Field),

    #[error("{} must be at least {min} characters", .field.label())]
    TooShort { field: Field, min: usize },

    #[error("{} can only contain letters, spaces, hyphens, and apostrophes", .0.label())]
    InvalidCharacters(Field),

    #[error("Please enter a valid {}", .field.noun())]
    TooFewDigits { field: Field, found: usize },

    #[error("Please enter a valid {}", .0.noun())]
    InvalidFormat(Field),
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::Required(field)
            | FieldError::InvalidCharacters(field)
            | FieldError::InvalidFormat(field) => *field,
            FieldError::TooShort { field, .. } | FieldError::TooFewDigits { field, .. } => *field,
        }
    }
}

pub type FieldResult = std::result::Result<(), FieldError>;
pub type Validator = fn(&str) -> FieldResult;
pub type Formatter = fn(&str) -> String;

pub fn validate_name(raw: &str) -> FieldResult {
    let name = raw.trim();
    if name.is_empty() {
        return Err(FieldError::Required(Field::Name));
    }
    // Length in UTF-16 units, as the browser counts it.
    if name.encode_utf16().count() < MIN_NAME_LEN {
        return Err(FieldError::TooShort {
            field: Field::Name,
            min: MIN_NAME_LEN,
        });
    }
    if !NAME_RE.is_match(name) {
        return Err(FieldError::InvalidCharacters(Field::Name));
    }
    Ok(())
}

pub fn validate_email(raw: &str) -> FieldResult {
    let email = raw.trim();
    if email.is_empty() {
        return Err(FieldError::Required(Field::Email));
    }
    if !EMAIL_RE.is_match(email) {
        return Err(FieldError::InvalidFormat(Field::Email));
    }
    Ok(())
}

/// Both the digit count and the shape check must pass.
pub fn validate_phone(raw: &str) -> FieldResult {
    let phone = raw.trim();
    if phone.is_empty() {
        return Err(FieldError::Required(Field::Phone));
    }
    let digits = raw.chars().filter(char::is_ascii_digit).count();
    if digits < MIN_PHONE_DIGITS {
        return Err(FieldError::TooFewDigits {
            field: Field::Phone,
            found: digits,
        });
    }
    if !PHONE_RE.is_match(phone) {
        return Err(FieldError::InvalidFormat(Field::Phone));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: Field,
    pub validator: Validator,
    /// Applied to the field value on every input event.
    pub formatter: Option<Formatter>,
}

/// Validators and input formatters registered per field, kept in focus order.
#[derive(Debug, Clone)]
pub struct FieldRules {
    rules: Vec<FieldRule>,
}

impl FieldRules {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Registers (or replaces) the rule for `field`. Rules stay ordered by
    /// [`Field::ALL`] regardless of registration order.
    pub fn register(mut self, field: Field, validator: Validator, formatter: Option<Formatter>) -> Self {
        self.rules.retain(|rule| rule.field != field);
        self.rules.push(FieldRule {
            field,
            validator,
            formatter,
        });
        self.rules
            .sort_by_key(|rule| Field::ALL.iter().position(|f| *f == rule.field));
        self
    }

    pub fn get(&self, field: Field) -> Option<&FieldRule> {
        self.rules.iter().find(|rule| rule.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldRule> {
        self.rules.iter()
    }

    pub fn validate(&self, field: Field, raw: &str) -> FieldResult {
        match self.get(field) {
            Some(rule) => (rule.validator)(raw),
            None => Ok(()),
        }
    }
}

impl Default for FieldRules {
    fn default() -> Self {
        Self::new()
            .register(Field::Name, validate_name, None)
            .register(Field::Email, validate_email, None)
            .register(Field::Phone, validate_phone, Some(format_phone))
    }
}
