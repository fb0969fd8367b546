//! Author API endpoints
//!
//! - GET /api/authors - List authors
//! - GET /api/authors/top - Authors ranked by article output
//! - POST /api/authors - Create author
//! - DELETE /api/authors/{id} - Delete author

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::api::{ActionResult, ApiError, AppState};
use crate::models::{Author, CreateAuthorInput, TopAuthor};

#[derive(Debug, Deserialize)]
pub struct TopQuery {
    #[serde(default = "default_top_limit")]
    pub limit: i64,
}

fn default_top_limit() -> i64 {
    3
}

/// Build the authors router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_authors))
        .route("/", post(create_author))
        .route("/top", get(top_authors))
        .route("/{id}", delete(delete_author))
}

async fn list_authors(
    State(state): State<AppState>,
) -> Result<Json<ActionResult<Vec<Author>>>, ApiError> {
    let authors = state.author_service.list().await?;
    Ok(Json(ActionResult::ok(authors)))
}

async fn top_authors(
    State(state): State<AppState>,
    Query(query): Query<TopQuery>,
) -> Result<Json<ActionResult<Vec<TopAuthor>>>, ApiError> {
    let authors = state.author_service.top_authors(query.limit).await?;
    Ok(Json(ActionResult::ok(authors)))
}

async fn create_author(
    State(state): State<AppState>,
    Json(input): Json<CreateAuthorInput>,
) -> Result<Json<ActionResult<Author>>, ApiError> {
    let author = state.author_service.create(input).await?;
    Ok(Json(ActionResult::ok(author)))
}

async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ActionResult<()>>, ApiError> {
    state.author_service.delete(id).await?;
    Ok(Json(ActionResult::ok_empty()))
}
