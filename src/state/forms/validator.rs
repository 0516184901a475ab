//! Field and whole-form validation rules

use super::field::{FieldKind, FieldValue, FormField};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

/// `local@domain.tld`: one `@`, no whitespace, a dot inside the domain
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("valid email pattern"));

/// Digits, spaces, `+`, `-` and parentheses only
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9 +\-()]+$").expect("valid phone pattern"));

/// How strictly phone numbers are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhonePolicy {
    /// Allowed characters and at least seven digits
    #[default]
    Strict,
    /// Allowed characters and at least one digit
    Loose,
}

impl PhonePolicy {
    /// Fewest digits a number needs under this policy
    pub fn min_digits(&self) -> usize {
        match self {
            PhonePolicy::Strict => 7,
            PhonePolicy::Loose => 1,
        }
    }

    fn accepts(&self, value: &str) -> bool {
        PHONE_PATTERN.is_match(value)
            && value.chars().filter(char::is_ascii_digit).count() >= self.min_digits()
    }
}

/// Why a field value was rejected; `Display` is the user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationErrorKind {
    #[error("This field is required.")]
    Required,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a valid phone number.")]
    InvalidPhone,
    #[error("Please choose one of the listed options.")]
    UnknownOption,
}

/// A rejected field and the reason
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field_label}: {kind}")]
pub struct ValidationError {
    pub field_name: String,
    /// Label shown to the visitor
    pub field_label: String,
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    fn new(field: &FormField, kind: ValidationErrorKind) -> Self {
        Self {
            field_name: field.name.clone(),
            field_label: field.label.clone(),
            kind,
        }
    }

    /// Human-readable message shown next to the field
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Field validator configured with the site's phone policy
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    pub phone_policy: PhonePolicy,
}

impl Validator {
    pub fn new(phone_policy: PhonePolicy) -> Self {
        Self { phone_policy }
    }

    /// Validate a single field
    pub fn validate(&self, field: &FormField) -> Result<(), ValidationError> {
        if field.is_empty() {
            return if field.required {
                Err(ValidationError::new(field, ValidationErrorKind::Required))
            } else {
                Ok(())
            };
        }

        let kind = match (field.kind, &field.value) {
            (FieldKind::Email, FieldValue::Text(value)) if !EMAIL_PATTERN.is_match(value.trim()) => {
                Some(ValidationErrorKind::InvalidEmail)
            }
            (FieldKind::Tel, FieldValue::Text(value)) if !self.phone_policy.accepts(value.trim()) => {
                Some(ValidationErrorKind::InvalidPhone)
            }
            (FieldKind::Select | FieldKind::RadioGroup, FieldValue::Choice(Some(choice)))
                if !field.options.contains(choice) =>
            {
                Some(ValidationErrorKind::UnknownOption)
            }
            (FieldKind::CheckboxGroup, FieldValue::Checked(items))
                if items.iter().any(|i| !field.options.contains(i)) =>
            {
                Some(ValidationErrorKind::UnknownOption)
            }
            _ => None,
        };

        match kind {
            Some(kind) => Err(ValidationError::new(field, kind)),
            None => Ok(()),
        }
    }

    /// Validate every field, one error per failing field in declaration order
    pub fn validate_all(&self, fields: &[FormField]) -> Vec<ValidationError> {
        fields
            .iter()
            .filter_map(|field| self.validate(field).err())
            .collect()
    }

    /// Validate and, if nothing failed, hand back a snapshot that a
    /// submission record can be built from
    pub fn check(&self, fields: &[FormField]) -> Result<ValidatedForm, Vec<ValidationError>> {
        let errors = self.validate_all(fields);
        if errors.is_empty() {
            Ok(ValidatedForm {
                fields: fields.to_vec(),
            })
        } else {
            Err(errors)
        }
    }
}

/// Field values that passed a validation run with no errors.
///
/// Only [`Validator::check`] constructs this.
#[derive(Debug, Clone)]
pub struct ValidatedForm {
    fields: Vec<FormField>,
}

impl ValidatedForm {
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }
}
