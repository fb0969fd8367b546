//! Credentials validation
//!
//! Shape checks for sign-in and sign-up forms. Authentication itself is
//! handled by the external identity provider; these checks only stop
//! obviously malformed credentials from leaving the form.

use serde::{Deserialize, Serialize};

use crate::validation::{is_valid_email, FieldErrors, ValidationError};

/// Symbols accepted (and one required) in passwords
const PASSWORD_SYMBOLS: &str = "!@#$%^&*()_+-=[]{};':\"|,.<>/?";

/// Sign-in form payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsInput {
    pub email: String,
    pub password: String,
}

/// Sign-up form payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpInput {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Validate sign-in credentials.
pub fn validate_sign_in(input: &CredentialsInput) -> Result<(), ValidationError> {
    let mut errors = FieldErrors::new();
    check_email(&mut errors, &input.email);
    check_password(&mut errors, &input.password);
    errors.into_result()
}

/// Validate sign-up credentials, including confirmation equality.
pub fn validate_sign_up(input: &SignUpInput) -> Result<(), ValidationError> {
    let mut errors = FieldErrors::new();
    check_email(&mut errors, &input.email);
    check_password(&mut errors, &input.password);
    if input.password != input.confirm_password {
        errors.push("confirm_password", "Passwords do not match");
    }
    errors.into_result()
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    let email = email.trim();
    let len = email.chars().count();
    if !(5..=100).contains(&len) || !is_valid_email(email) {
        errors.push("email", "Enter a valid email address");
    }
}

fn check_password(errors: &mut FieldErrors, password: &str) {
    let len = password.chars().count();
    if !(8..=32).contains(&len) {
        errors.push("password", "Password must be 8-32 characters");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("password", "Password needs an uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("password", "Password needs a lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("password", "Password needs a digit");
    }
    if !password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        errors.push("password", "Password needs a symbol");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_PASSWORD: &str = "Str0ng!pass";

    #[test]
    fn test_valid_sign_in() {
        let input = CredentialsInput {
            email: "reader@example.com".to_string(),
            password: GOOD_PASSWORD.to_string(),
        };
        assert!(validate_sign_in(&input).is_ok());
    }

    #[test]
    fn test_password_without_digit_rejected() {
        let input = SignUpInput {
            email: "reader@example.com".to_string(),
            password: "Strong!pass".to_string(),
            confirm_password: "Strong!pass".to_string(),
        };
        let err = validate_sign_up(&input).unwrap_err();
        assert_eq!(
            err.fields().get("password"),
            Some(&["Password needs a digit".to_string()][..])
        );
    }

    #[test]
    fn test_mismatched_confirmation_rejected() {
        let input = SignUpInput {
            email: "reader@example.com".to_string(),
            password: GOOD_PASSWORD.to_string(),
            confirm_password: "Str0ng!pasz".to_string(),
        };
        let err = validate_sign_up(&input).unwrap_err();
        assert!(err.fields().get("confirm_password").is_some());
        assert!(err.fields().get("password").is_none());
    }

    #[test]
    fn test_matching_confirmation_passes() {
        let input = SignUpInput {
            email: "reader@example.com".to_string(),
            password: GOOD_PASSWORD.to_string(),
            confirm_password: GOOD_PASSWORD.to_string(),
        };
        assert!(validate_sign_up(&input).is_ok());
    }

    #[test]
    fn test_password_length_bounds() {
        let cases = [
            ("Ab1!xyzw".to_string(), true),                   // exactly 8
            ("Ab1!xyz".to_string(), false),                   // 7
            (format!("Ab1!{}", "x".repeat(28)), true),        // exactly 32
            (format!("Ab1!{}", "x".repeat(29)), false),       // 33
        ];
        for (password, ok) in cases {
            let input = CredentialsInput {
                email: "reader@example.com".to_string(),
                password: password.clone(),
            };
            assert_eq!(validate_sign_in(&input).is_ok(), ok, "password {:?}", password);
        }
    }

    #[test]
    fn test_missing_character_classes_accumulate() {
        let input = CredentialsInput {
            email: "reader@example.com".to_string(),
            password: "alllowercase".to_string(),
        };
        let err = validate_sign_in(&input).unwrap_err();
        let messages = err.fields().get("password").expect("password errors");
        // uppercase, digit and symbol are all missing
        assert_eq!(messages.len(), 3);
    }

    #[test]
    fn test_email_length_bounds() {
        let input = CredentialsInput {
            email: "a@b.".to_string(),
            password: GOOD_PASSWORD.to_string(),
        };
        assert!(validate_sign_in(&input).is_err());

        let long_local = "x".repeat(95);
        let input = CredentialsInput {
            email: format!("{}@ex.com", long_local),
            password: GOOD_PASSWORD.to_string(),
        };
        assert!(validate_sign_in(&input).is_err());
    }
}
