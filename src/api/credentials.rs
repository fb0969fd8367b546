//! Credentials API endpoints
//!
//! - POST /api/credentials/sign-in - Validate sign-in credentials
//! - POST /api/credentials/sign-up - Validate sign-up credentials
//!
//! Authentication itself belongs to the external identity provider;
//! these endpoints only report whether the form would be accepted.

use axum::{extract::State, routing::post, Json, Router};

use crate::api::{ActionResult, ApiError, AppState};
use crate::validation::{validate_sign_in, validate_sign_up, CredentialsInput, SignUpInput};

/// Build the credentials router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sign-in", post(sign_in))
        .route("/sign-up", post(sign_up))
}

async fn sign_in(
    State(_state): State<AppState>,
    Json(input): Json<CredentialsInput>,
) -> Result<Json<ActionResult<()>>, ApiError> {
    validate_sign_in(&input).map_err(|err| ApiError::validation(err.into_fields()))?;
    Ok(Json(ActionResult::ok_empty()))
}

async fn sign_up(
    State(_state): State<AppState>,
    Json(input): Json<SignUpInput>,
) -> Result<Json<ActionResult<()>>, ApiError> {
    validate_sign_up(&input).map_err(|err| ApiError::validation(err.into_fields()))?;
    Ok(Json(ActionResult::ok_empty()))
}
