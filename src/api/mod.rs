//! HTTP API
//!
//! Route assembly and shared state for all endpoints. Handlers stay thin:
//! extract, call the service, wrap the outcome in the action envelope.

pub mod articles;
pub mod authors;
pub mod cards;
pub mod categories;
pub mod contact;
pub mod credentials;
pub mod proxy;
pub mod responses;
pub mod subscriptions;

pub use responses::{ActionResult, ApiError};

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::SpotPriceConfig;
use crate::services::{
    ArticleService, AuthorService, CategoryService, ContactService, EmailService,
};

/// Application state containing shared services
#[derive(Clone)]
pub struct AppState {
    pub article_service: Arc<ArticleService>,
    pub author_service: Arc<AuthorService>,
    pub category_service: Arc<CategoryService>,
    pub contact_service: Arc<ContactService>,
    pub email_service: Arc<EmailService>,
    pub spot_prices: Arc<SpotPriceConfig>,
    pub http_client: reqwest::Client,
}

fn build_api_router() -> Router<AppState> {
    Router::new()
        .nest("/articles", articles::router())
        .nest("/authors", authors::router())
        .nest("/categories", categories::router())
        .nest("/contact", contact::router())
        .nest("/credentials", credentials::router())
        .route("/plans", get(subscriptions::list_plans))
        .route("/subscriptions", post(subscriptions::select_plan))
        .route("/cards/validate", post(cards::validate))
        .route("/spotprices", get(proxy::spot_prices))
}

/// Build the complete router with middleware
pub fn build_router(state: AppState, cors_origin: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors_origin.parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .nest("/api", build_api_router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
