//! Payment card API endpoints
//!
//! - POST /api/cards/validate - Validate a card preview
//!
//! Card handling is a UI mock: the validated preview goes straight back
//! to the client and is never stored or charged.

use axum::{extract::State, Json};
use chrono::Utc;

use crate::api::{ActionResult, ApiError, AppState};
use crate::models::SavedCard;
use crate::validation::{validate_card, CardInput};

pub async fn validate(
    State(_state): State<AppState>,
    Json(input): Json<CardInput>,
) -> Result<Json<ActionResult<SavedCard>>, ApiError> {
    let card = validate_card(&input, Utc::now())
        .map_err(|err| ApiError::validation(err.into_fields()))?;

    Ok(Json(ActionResult::ok(card)))
}
