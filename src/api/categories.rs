//! Category API endpoints
//!
//! - GET /api/categories - List categories
//! - GET /api/categories/{title} - Category page (articles by views)
//! - POST /api/categories - Create category
//! - DELETE /api/categories/{title} - Delete category by numeric id

use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};

use crate::api::{ActionResult, ApiError, AppState};
use crate::models::{Category, CategoryWithArticles, CreateCategoryInput};

/// Build the categories router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories))
        .route("/", post(create_category))
        .route("/{title}", get(get_category))
        .route("/{title}", delete(delete_category))
}

async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<ActionResult<Vec<Category>>>, ApiError> {
    let categories = state.category_service.list().await?;
    Ok(Json(ActionResult::ok(categories)))
}

async fn get_category(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<ActionResult<CategoryWithArticles>>, ApiError> {
    let view = state.category_service.by_title(&title).await?;
    Ok(Json(ActionResult::ok(view)))
}

async fn create_category(
    State(state): State<AppState>,
    Json(input): Json<CreateCategoryInput>,
) -> Result<Json<ActionResult<Category>>, ApiError> {
    let category = state.category_service.create(input).await?;
    Ok(Json(ActionResult::ok(category)))
}

async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ActionResult<()>>, ApiError> {
    state.category_service.delete(id).await?;
    Ok(Json(ActionResult::ok_empty()))
}
