//! Presence and format rules for user payloads.
//!
//! Presence is checked by [`UserPayload::require_all_fields`] for create and
//! replace. Format rules run through [`UserDraft::validate_fields`], the only
//! way to obtain a [`ValidUser`], which every repository write requires.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::ToSchema;
use validator::{Validate, ValidateEmail, ValidationError};

use crate::error::{UserError, UserResult};
use crate::models::{User, UserPayload};

pub const NAME_MESSAGE: &str = "Name can only contains alphabets and whitespaces";
pub const EMAIL_MESSAGE: &str = "Provide a valid email address";
pub const PHONE_MESSAGE: &str = "Mobile number can only contain 10 digits or 7 for landline numbers";

/// ASCII letters and spaces
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z ]+$").unwrap());

/// Exactly 10 or exactly 7 ASCII digits
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[0-9]{10}|[0-9]{7})$").unwrap());

/// Reporting order of violations in a ValidationError body
const FIELD_ORDER: [&str; 3] = ["name", "email", "phone"];

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if !NAME_PATTERN.is_match(name) {
        return Err(ValidationError::new("name_pattern").with_message(NAME_MESSAGE.into()));
    }
    Ok(())
}

/// Well-formed address whose domain ends in an alphabetic TLD of 2+ letters
fn validate_email(email: &str) -> Result<(), ValidationError> {
    let has_tld = email
        .rsplit_once('@')
        .and_then(|(_, domain)| domain.rsplit_once('.'))
        .is_some_and(|(_, tld)| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()));

    if !email.validate_email() || !has_tld {
        return Err(ValidationError::new("email").with_message(EMAIL_MESSAGE.into()));
    }
    Ok(())
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if !PHONE_PATTERN.is_match(phone) {
        return Err(ValidationError::new("phone_pattern").with_message(PHONE_MESSAGE.into()));
    }
    Ok(())
}

/// One failed format rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({ "field": "name", "message": NAME_MESSAGE }))]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Complete candidate record, not yet checked against the format rules
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct UserDraft {
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[validate(custom(function = "validate_email"))]
    pub email: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
}

/// Record fields that passed every format rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidUser(UserDraft);

impl ValidUser {
    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }

    pub fn phone(&self) -> &str {
        &self.0.phone
    }
}

impl UserDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Check all three format rules, reporting every failure at once
    pub fn validate_fields(self) -> UserResult<ValidUser> {
        match self.validate() {
            Ok(()) => Ok(ValidUser(self)),
            Err(errors) => {
                let field_errors = errors.field_errors();
                let violations = FIELD_ORDER
                    .iter()
                    .filter_map(|field| {
                        let error = field_errors.get(*field)?.first()?;
                        Some(FieldViolation {
                            field: (*field).to_string(),
                            message: error
                                .message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| error.code.to_string()),
                        })
                    })
                    .collect();

                Err(UserError::FieldFormatInvalid(violations))
            }
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl UserPayload {
    /// Presence rule: name, email and phone must all be supplied and non-empty
    pub fn require_all_fields(self) -> UserResult<UserDraft> {
        match (present(self.name), present(self.email), present(self.phone)) {
            (Some(name), Some(email), Some(phone)) => Ok(UserDraft { name, email, phone }),
            _ => Err(UserError::PresenceMissing),
        }
    }

    /// Overlay the supplied fields on `existing`; omitted fields keep their value
    pub fn merge_over(self, existing: &User) -> UserDraft {
        UserDraft {
            name: self.name.unwrap_or_else(|| existing.name.clone()),
            email: self.email.unwrap_or_else(|| existing.email.clone()),
            phone: self.phone.unwrap_or_else(|| existing.phone.clone()),
        }
    }
}
