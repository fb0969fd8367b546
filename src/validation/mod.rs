//! Input validation
//!
//! Pure shape/constraint checks for user-submitted data. Validators never
//! touch storage or the clock (the card expiry check takes its reference
//! instant as a parameter). Failures accumulate one message per violated
//! field in a [`FieldErrors`] map.

pub mod card;
pub mod contact;
pub mod credentials;
pub mod subscription;

pub use card::{validate_card, CardInput};
pub use contact::validate_contact;
pub use credentials::{validate_sign_in, validate_sign_up, CredentialsInput, SignUpInput};
pub use subscription::{validate_subscription, SubscriptionInput};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Per-field validation messages, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field.
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(|messages| messages.as_slice())
    }

    /// Consume the accumulated errors, failing when any were recorded.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ValidationError(self))
        }
    }
}

/// Validation failure carrying per-field detail
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("validation failed")]
pub struct ValidationError(FieldErrors);

impl ValidationError {
    pub fn fields(&self) -> &FieldErrors {
        &self.0
    }

    pub fn into_fields(self) -> FieldErrors {
        self.0
    }
}

impl From<FieldErrors> for ValidationError {
    fn from(errors: FieldErrors) -> Self {
        Self(errors)
    }
}

/// Shared email well-formedness check.
pub(crate) fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}
