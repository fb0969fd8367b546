//! Newsdesk - a lightweight news publishing platform backend

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use newsdesk::{
    api::{self, AppState},
    cache::MemoryCache,
    config::Config,
    db::{
        self,
        repositories::{
            SqlxArticleRepository, SqlxAuthorRepository, SqlxCategoryRepository,
            SqlxContactRepository,
        },
    },
    services::{ArticleService, AuthorService, CategoryService, ContactService, EmailService},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "newsdesk=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Newsdesk...");

    // Load configuration
    let config = Config::load_with_env(Path::new("config.yml"))?;
    tracing::info!("Configuration loaded");

    // Initialize database
    let pool = db::create_pool(&config.database).await?;
    tracing::info!("Database connected");

    // Run migrations
    db::migrations::run_migrations(&pool).await?;
    tracing::info!("Database migrations completed");

    // Initialize cache
    let cache = Arc::new(MemoryCache::with_capacity_and_ttl(
        10_000,
        Duration::from_secs(config.cache.ttl_seconds),
    ));
    tracing::info!("Cache initialized");

    // Create repositories
    let article_repo = SqlxArticleRepository::boxed(pool.clone());
    let author_repo = SqlxAuthorRepository::boxed(pool.clone());
    let category_repo = SqlxCategoryRepository::boxed(pool.clone());
    let contact_repo = SqlxContactRepository::boxed(pool.clone());

    // Initialize services
    let article_service = Arc::new(ArticleService::new(article_repo.clone(), cache.clone()));
    let author_service = Arc::new(AuthorService::new(author_repo));
    let category_service = Arc::new(CategoryService::new(
        category_repo,
        article_repo,
        cache.clone(),
    ));
    let contact_service = Arc::new(ContactService::new(contact_repo));
    let email_service = Arc::new(EmailService::new(config.smtp.clone()));

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    let state = AppState {
        article_service,
        author_service,
        category_service,
        contact_service,
        email_service,
        spot_prices: Arc::new(config.spot_prices.clone()),
        http_client,
    };

    let app = api::build_router(state, &config.server.cors_origin);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
