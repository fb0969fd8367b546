//! Payment card preview validation
//!
//! Normalizes the number by stripping whitespace, then checks the digit
//! count, holder length, expiry and CVV. The result is a client-held
//! `SavedCard`; nothing here is persisted or charged.

use chrono::{DateTime, Datelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::{CardBrand, SavedCard};
use crate::validation::{FieldErrors, ValidationError};

static EXPIRY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(0[1-9]|1[0-2])/(\d{2})$").unwrap());

/// Incoming card form payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardInput {
    pub number: String,
    pub holder: String,
    /// Expiry in MM/YY form
    pub expiry: String,
    pub cvv: String,
}

/// Validate a card preview. `now` anchors the expiry check so callers and
/// tests agree on what the current month is; a card expiring this month
/// is still valid.
pub fn validate_card(input: &CardInput, now: DateTime<Utc>) -> Result<SavedCard, ValidationError> {
    let mut errors = FieldErrors::new();

    let number: String = input
        .number
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if number.len() != 16 || !number.chars().all(|c| c.is_ascii_digit()) {
        errors.push("number", "Card number must be 16 digits");
    }

    let holder = input.holder.trim();
    let holder_len = holder.chars().count();
    if holder_len == 0 || holder_len > 50 {
        errors.push("holder", "Cardholder name must be 1-50 characters");
    }

    match EXPIRY_RE.captures(input.expiry.trim()) {
        Some(caps) => {
            let month: u32 = caps[1].parse().unwrap_or(0);
            let year: i32 = 2000 + caps[2].parse::<i32>().unwrap_or(0);
            if (year, month) < (now.year(), now.month()) {
                errors.push("expiry", "Card has expired");
            }
        }
        None => errors.push("expiry", "Expiry must be in MM/YY form"),
    }

    let cvv = input.cvv.trim();
    if !(3..=4).contains(&cvv.len()) || !cvv.chars().all(|c| c.is_ascii_digit()) {
        errors.push("cvv", "CVV must be 3-4 digits");
    }

    errors.into_result()?;

    Ok(SavedCard {
        brand: CardBrand::detect(&number),
        number,
        holder: holder.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        // Mid-month so the boundary cases are unambiguous
        Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap()
    }

    fn valid_input() -> CardInput {
        CardInput {
            number: "4242 4242 4242 4242".to_string(),
            holder: "Mari Maasikas".to_string(),
            expiry: "06/27".to_string(),
            cvv: "123".to_string(),
        }
    }

    #[test]
    fn test_valid_card_normalizes_number() {
        let card = validate_card(&valid_input(), fixed_now()).expect("Card should be valid");
        assert_eq!(card.number, "4242424242424242");
        assert_eq!(card.brand, CardBrand::Visa);
        assert_eq!(card.holder, "Mari Maasikas");
    }

    #[test]
    fn test_length_check_runs_on_digits_only() {
        let mut input = valid_input();
        // 15 digits padded with whitespace still has to fail
        input.number = " 4242 4242 4242 424 ".to_string();
        let err = validate_card(&input, fixed_now()).unwrap_err();
        assert!(err.fields().get("number").is_some());
    }

    #[test]
    fn test_non_digit_number_rejected() {
        let mut input = valid_input();
        input.number = "4242 4242 4242 424x".to_string();
        assert!(validate_card(&input, fixed_now()).is_err());
    }

    #[test]
    fn test_expiry_current_month_passes() {
        let mut input = valid_input();
        input.expiry = "06/26".to_string();
        assert!(validate_card(&input, fixed_now()).is_ok());
    }

    #[test]
    fn test_expiry_previous_month_fails() {
        let mut input = valid_input();
        input.expiry = "05/26".to_string();
        let err = validate_card(&input, fixed_now()).unwrap_err();
        assert_eq!(
            err.fields().get("expiry"),
            Some(&["Card has expired".to_string()][..])
        );
    }

    #[test]
    fn test_expiry_previous_year_fails() {
        let mut input = valid_input();
        input.expiry = "12/25".to_string();
        assert!(validate_card(&input, fixed_now()).is_err());
    }

    #[test]
    fn test_expiry_next_month_passes() {
        let mut input = valid_input();
        input.expiry = "07/26".to_string();
        assert!(validate_card(&input, fixed_now()).is_ok());
    }

    #[test]
    fn test_malformed_expiry_rejected() {
        for expiry in ["13/26", "00/26", "6/26", "06-26", "06/2026", ""] {
            let mut input = valid_input();
            input.expiry = expiry.to_string();
            let err = validate_card(&input, fixed_now()).unwrap_err();
            assert!(
                err.fields().get("expiry").is_some(),
                "expected expiry error for {:?}",
                expiry
            );
        }
    }

    #[test]
    fn test_holder_bounds() {
        let mut input = valid_input();
        input.holder = "   ".to_string();
        assert!(validate_card(&input, fixed_now()).is_err());

        let mut input = valid_input();
        input.holder = "x".repeat(51);
        assert!(validate_card(&input, fixed_now()).is_err());

        let mut input = valid_input();
        input.holder = "x".repeat(50);
        assert!(validate_card(&input, fixed_now()).is_ok());
    }

    #[test]
    fn test_cvv_bounds() {
        for (cvv, ok) in [("123", true), ("1234", true), ("12", false), ("12345", false), ("12a", false)] {
            let mut input = valid_input();
            input.cvv = cvv.to_string();
            assert_eq!(
                validate_card(&input, fixed_now()).is_ok(),
                ok,
                "cvv {:?}",
                cvv
            );
        }
    }

    #[test]
    fn test_all_failures_reported_together() {
        let input = CardInput {
            number: "1234".to_string(),
            holder: String::new(),
            expiry: "01/20".to_string(),
            cvv: "1".to_string(),
        };
        let err = validate_card(&input, fixed_now()).unwrap_err();
        let fields = err.fields();
        assert!(fields.get("number").is_some());
        assert!(fields.get("holder").is_some());
        assert!(fields.get("expiry").is_some());
        assert!(fields.get("cvv").is_some());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Whitespace placement never changes the outcome: any 16-digit
            /// number with spaces sprinkled in validates, and the saved
            /// number is always the bare digits.
            #[test]
            fn property_whitespace_is_ignored(
                digits in "[0-9]{16}",
                cuts in proptest::collection::vec(0usize..=16, 0..4)
            ) {
                let mut spaced = digits.clone();
                let mut offsets: Vec<usize> = cuts;
                offsets.sort_unstable_by(|a, b| b.cmp(a));
                for cut in offsets {
                    spaced.insert(cut, ' ');
                }

                let input = CardInput {
                    number: spaced,
                    holder: "Mari Maasikas".to_string(),
                    expiry: "12/30".to_string(),
                    cvv: "123".to_string(),
                };
                let card = validate_card(&input, fixed_now()).expect("Card should be valid");
                prop_assert_eq!(card.number, digits);
            }
        }
    }
}
