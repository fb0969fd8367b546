//! Shared API response types
//!
//! Every action answers with the same discriminated envelope:
//! `{"success": true, "data": ...}` on success, or
//! `{"success": false, "message": "...", "errors": {field: [messages]}}`
//! on failure. Validation failures carry per-field detail; anything
//! unexpected is logged server-side and surfaced as a generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::services::article::ArticleServiceError;
use crate::services::author::AuthorServiceError;
use crate::services::category::CategoryServiceError;
use crate::services::contact::ContactServiceError;
use crate::validation::FieldErrors;

/// Generic failure message for errors whose detail stays server-side
const GENERIC_FAILURE: &str = "Something went wrong";

/// Uniform action result envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ActionResult<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl<T> ActionResult<T> {
    /// Successful result carrying data
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            errors: None,
        }
    }
}

impl ActionResult<()> {
    /// Successful result with nothing to return (deletes)
    pub fn ok_empty() -> Self {
        Self {
            success: true,
            data: None,
            message: None,
            errors: None,
        }
    }
}

/// Failure half of the action contract, paired with the HTTP status to use
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    errors: Option<FieldErrors>,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
            errors: None,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: message.into(),
            errors: None,
        }
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: message.into(),
            errors: None,
        }
    }

    pub fn validation(errors: FieldErrors) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: "Validation failed".to_string(),
            errors: Some(errors),
        }
    }

    /// Internal failure; the cause must already have been logged.
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: GENERIC_FAILURE.to_string(),
            errors: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body: ActionResult<()> = ActionResult {
            success: false,
            data: None,
            message: Some(self.message),
            errors: self.errors,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<ArticleServiceError> for ApiError {
    fn from(err: ArticleServiceError) -> Self {
        match err {
            ArticleServiceError::NotFound(id) => {
                Self::not_found(format!("Article {} not found", id))
            }
            ArticleServiceError::Validation(err) => Self::validation(err.into_fields()),
            ArticleServiceError::Internal(err) => {
                tracing::error!("Article action failed: {:#}", err);
                Self::internal()
            }
        }
    }
}

impl From<AuthorServiceError> for ApiError {
    fn from(err: AuthorServiceError) -> Self {
        match err {
            AuthorServiceError::NotFound(id) => Self::not_found(format!("Author {} not found", id)),
            AuthorServiceError::Validation(err) => Self::validation(err.into_fields()),
            AuthorServiceError::Internal(err) => {
                tracing::error!("Author action failed: {:#}", err);
                Self::internal()
            }
        }
    }
}

impl From<CategoryServiceError> for ApiError {
    fn from(err: CategoryServiceError) -> Self {
        match err {
            CategoryServiceError::NotFound(title) => {
                Self::not_found(format!("Category {} not found", title))
            }
            CategoryServiceError::DuplicateTitle(title) => {
                Self::conflict(format!("Category {} already exists", title))
            }
            CategoryServiceError::Validation(err) => Self::validation(err.into_fields()),
            CategoryServiceError::Internal(err) => {
                tracing::error!("Category action failed: {:#}", err);
                Self::internal()
            }
        }
    }
}

impl From<ContactServiceError> for ApiError {
    fn from(err: ContactServiceError) -> Self {
        match err {
            ContactServiceError::Validation(err) => Self::validation(err.into_fields()),
            ContactServiceError::Internal(err) => {
                tracing::error!("Contact action failed: {:#}", err);
                Self::internal()
            }
        }
    }
}
