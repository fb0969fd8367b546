//! Article API endpoints
//!
//! - GET /api/articles/landing - Landing page split
//! - GET /api/articles/most-viewed - Most viewed articles
//! - GET /api/articles/search - Headline search
//! - GET /api/articles/{id} - Article detail (bumps the view counter)
//! - POST /api/articles - Create article
//! - DELETE /api/articles/{id} - Delete article

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::api::{ActionResult, ApiError, AppState};
use crate::models::{Article, ArticleDetail, CreateArticleInput, LandingArticles};

#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Build the articles router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_article))
        .route("/landing", get(landing))
        .route("/most-viewed", get(most_viewed))
        .route("/search", get(search))
        .route("/{id}", get(get_article))
        .route("/{id}", delete(delete_article))
}

async fn landing(
    State(state): State<AppState>,
) -> Result<Json<ActionResult<LandingArticles>>, ApiError> {
    let landing = state.article_service.landing().await?;
    Ok(Json(ActionResult::ok(landing)))
}

async fn most_viewed(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<ActionResult<Vec<Article>>>, ApiError> {
    let articles = state.article_service.most_viewed(query.limit).await?;
    Ok(Json(ActionResult::ok(articles)))
}

async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ActionResult<Vec<Article>>>, ApiError> {
    let articles = state.article_service.search(&query.q).await?;
    Ok(Json(ActionResult::ok(articles)))
}

async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ActionResult<ArticleDetail>>, ApiError> {
    let detail = state.article_service.get(id).await?;

    // Reads count as views; a failed bump must never fail the read.
    if let Err(err) = state.article_service.record_view(id).await {
        tracing::warn!("Failed to record view for article {}: {:#}", id, err);
    }

    Ok(Json(ActionResult::ok(detail)))
}

async fn create_article(
    State(state): State<AppState>,
    Json(input): Json<CreateArticleInput>,
) -> Result<Json<ActionResult<Article>>, ApiError> {
    let article = state.article_service.create(input).await?;
    Ok(Json(ActionResult::ok(article)))
}

async fn delete_article(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ActionResult<()>>, ApiError> {
    state.article_service.delete(id).await?;
    Ok(Json(ActionResult::ok_empty()))
}
