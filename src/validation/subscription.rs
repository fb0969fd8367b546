//! Subscription selection validation

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::{find_plan, Plan};
use crate::validation::{FieldErrors, ValidationError};

static USER_TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,64}$").unwrap());

/// Incoming plan selection payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionInput {
    pub plan_id: u8,
    pub user_id: String,
}

/// Validate a plan selection, resolving the chosen plan from the catalog.
pub fn validate_subscription(input: &SubscriptionInput) -> Result<&'static Plan, ValidationError> {
    let mut errors = FieldErrors::new();

    let plan = find_plan(input.plan_id);
    if plan.is_none() {
        errors.push("plan_id", "Choose one of the available plans");
    }
    if !USER_TOKEN_RE.is_match(input.user_id.trim()) {
        errors.push("user_id", "Enter a valid user id");
    }

    match plan {
        Some(plan) if errors.is_empty() => Ok(plan),
        _ => Err(errors.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_selection_resolves_plan() {
        let input = SubscriptionInput {
            plan_id: 3,
            user_id: "user_42".to_string(),
        };
        let plan = validate_subscription(&input).expect("Selection should be valid");
        assert_eq!(plan.name, "Elite");
    }

    #[test]
    fn test_unknown_plan_rejected() {
        for plan_id in [0, 4, 99] {
            let input = SubscriptionInput {
                plan_id,
                user_id: "user_42".to_string(),
            };
            let err = validate_subscription(&input).unwrap_err();
            assert!(err.fields().get("plan_id").is_some(), "plan_id {}", plan_id);
        }
    }

    #[test]
    fn test_bad_user_id_rejected() {
        let too_long = "x".repeat(65);
        for user_id in ["", "   ", "has spaces", "emoji🙂", too_long.as_str()] {
            let input = SubscriptionInput {
                plan_id: 1,
                user_id: user_id.to_string(),
            };
            let err = validate_subscription(&input).unwrap_err();
            assert!(err.fields().get("user_id").is_some(), "user_id {:?}", user_id);
        }
    }

    #[test]
    fn test_both_failures_reported() {
        let input = SubscriptionInput {
            plan_id: 9,
            user_id: String::new(),
        };
        let err = validate_subscription(&input).unwrap_err();
        assert!(err.fields().get("plan_id").is_some());
        assert!(err.fields().get("user_id").is_some());
    }
}
