//! Spot price proxy
//!
//! Forwards GET /api/spotprices to the configured upstream provider
//! verbatim. No parsing happens here; the widget consumes the provider's
//! JSON as-is, and upstream failures surface as 502 with a generic
//! message.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::api::{ApiError, AppState};

pub async fn spot_prices(State(state): State<AppState>) -> Result<Response, ApiError> {
    let upstream = &state.spot_prices.upstream_url;

    let response = state.http_client.get(upstream).send().await.map_err(|err| {
        tracing::warn!("Spot price upstream request failed: {:#}", err);
        ApiError::bad_gateway("Spot price provider unavailable")
    })?;

    let status =
        StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("application/json")
        .to_string();

    let body = response.bytes().await.map_err(|err| {
        tracing::warn!("Spot price upstream body read failed: {:#}", err);
        ApiError::bad_gateway("Spot price provider unavailable")
    })?;

    Ok((status, [(header::CONTENT_TYPE, content_type)], body).into_response())
}
