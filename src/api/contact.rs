//! Contact API endpoints
//!
//! - POST /api/contact - Submit the contact form
//! - GET /api/contact/submissions - List submissions (admin)
//!
//! A stored submission triggers a best-effort email notification to the
//! configured inbox; the provider's preview URL rides back on the
//! response instead of being parked in shared state.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::api::{ActionResult, ApiError, AppState};
use crate::models::{ContactInput, ContactSubmission};
use crate::services::OutgoingEmail;

/// Response for a stored submission
#[derive(Debug, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
}

/// Build the contact router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(submit))
        .route("/submissions", get(list_submissions))
}

async fn submit(
    State(state): State<AppState>,
    Json(input): Json<ContactInput>,
) -> Result<Json<ActionResult<ContactReceipt>>, ApiError> {
    let submission = state.contact_service.submit(input).await?;

    // The submission is already stored; notification failures only lose
    // the heads-up mail.
    let mut preview_url = None;
    if let Some(notify_to) = state.email_service.notify_address() {
        let email = OutgoingEmail {
            to: notify_to.to_string(),
            subject: format!("Contact form: {}", submission.subject),
            html: notification_html(&submission),
        };
        match state.email_service.send(email).await {
            Ok(receipt) => preview_url = receipt.preview_url,
            Err(err) => tracing::warn!("Failed to send contact notification: {:#}", err),
        }
    }

    Ok(Json(ActionResult::ok(ContactReceipt {
        id: submission.id,
        preview_url,
    })))
}

async fn list_submissions(
    State(state): State<AppState>,
) -> Result<Json<ActionResult<Vec<ContactSubmission>>>, ApiError> {
    let submissions = state.contact_service.list().await?;
    Ok(Json(ActionResult::ok(submissions)))
}

fn notification_html(submission: &ContactSubmission) -> String {
    format!(
        "<h2>{}</h2><p><strong>{}</strong> &lt;{}&gt;</p><p>{}</p>",
        escape_html(&submission.subject),
        escape_html(&submission.name),
        escape_html(&submission.email),
        escape_html(&submission.message),
    )
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
