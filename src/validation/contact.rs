//! Contact form validation

use crate::models::ContactInput;
use crate::validation::{is_valid_email, FieldErrors, ValidationError};

/// Validate a contact form submission before it is stored.
pub fn validate_contact(input: &ContactInput) -> Result<(), ValidationError> {
    let mut errors = FieldErrors::new();

    if input.name.trim().is_empty() {
        errors.push("name", "Name is required");
    }
    if !is_valid_email(input.email.trim()) {
        errors.push("email", "Enter a valid email address");
    }
    if input.subject.trim().is_empty() {
        errors.push("subject", "Subject is required");
    }
    if input.message.trim().is_empty() {
        errors.push("message", "Message is required");
    }

    errors.into_result()
}
