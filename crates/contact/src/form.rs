use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::{Validate, ValidationError};

// Same shapes the public site always enforced: local part, one `@`, a
// dotted domain, no whitespace anywhere; phone allows an optional
// leading `+` and 7-20 digits/spaces/hyphens/parentheses.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email shape regex")
});
static PHONE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]{7,20}$").expect("phone shape regex"));

/// The four contact form fields.
#[derive(
    EnumString, Display, AsRefStr, VariantArray, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord,
)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

/// Form state as typed by the visitor. `phone` may stay empty; the other
/// three are required.
#[derive(Validate, Default, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    #[validate(custom(function = validate_name))]
    pub name: String,
    #[validate(custom(function = validate_email))]
    pub email: String,
    #[validate(custom(function = validate_phone))]
    pub phone: String,
    #[validate(custom(function = validate_message))]
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
    }

    /// Run every field check and collect all failures. Built fresh on
    /// each pass, so fixing one field never leaves a stale error on
    /// another.
    pub fn field_errors(&self) -> FieldErrors {
        match self.validate() {
            Ok(()) => FieldErrors::default(),
            Err(errors) => {
                let mut map = BTreeMap::new();
                for (field, errs) in errors.field_errors() {
                    let Ok(field) = Field::from_str(&field) else {
                        continue;
                    };
                    if let Some(code) = errs.first().map(|e| e.code.to_string()) {
                        map.insert(field, code);
                    }
                }
                FieldErrors(map)
            }
        }
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("nameRequired"));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::new("emailRequired"));
    }
    if !EMAIL_SHAPE.is_match(email) {
        return Err(ValidationError::new("emailInvalid"));
    }
    Ok(())
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    // Optional field, only checked once something was typed.
    if !phone.trim().is_empty() && !PHONE_SHAPE.is_match(phone) {
        return Err(ValidationError::new("phoneInvalid"));
    }
    Ok(())
}

fn validate_message(message: &str) -> Result<(), ValidationError> {
    if message.trim().is_empty() {
        return Err(ValidationError::new("messageRequired"));
    }
    Ok(())
}

/// Per-field validation errors, keyed by error code (`nameRequired`,
/// `emailInvalid`, ...). Absence of a field means it is valid; codes are
/// translated through the locale bundle at render time.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn code(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, code)| (*field, code.as_str()))
    }
}

/// Locale bundle key for an error code.
pub fn error_message_key(code: &str) -> String {
    format!("contact.form.errors.{code}")
}
