//! Subscription API endpoints
//!
//! - GET /api/plans - The fixed plan catalog
//! - POST /api/subscriptions - Validate a plan selection
//!
//! Nothing is charged or persisted here; the selection is validated and
//! echoed back for the client-side checkout mock.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::{ActionResult, ApiError, AppState};
use crate::models::{Plan, PLAN_CATALOG};
use crate::validation::{validate_subscription, SubscriptionInput};

/// A validated plan selection
#[derive(Debug, Serialize)]
pub struct SubscriptionSelection {
    pub user_id: String,
    pub plan: Plan,
}

pub async fn list_plans(
    State(_state): State<AppState>,
) -> Json<ActionResult<Vec<Plan>>> {
    Json(ActionResult::ok(PLAN_CATALOG.to_vec()))
}

pub async fn select_plan(
    State(_state): State<AppState>,
    Json(input): Json<SubscriptionInput>,
) -> Result<Json<ActionResult<SubscriptionSelection>>, ApiError> {
    let plan = validate_subscription(&input)
        .map_err(|err| ApiError::validation(err.into_fields()))?;

    Ok(Json(ActionResult::ok(SubscriptionSelection {
        user_id: input.user_id.trim().to_string(),
        plan: plan.clone(),
    })))
}
