//! Article service
//!
//! Business logic for the reading surfaces:
//! - Landing page split (main + secondary articles)
//! - Most-viewed and search listings
//! - Best-effort view counting
//! - Admin create/delete with cache invalidation

use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{CacheLayer, MemoryCache};
use crate::db::repositories::ArticleRepository;
use crate::models::{
    Article, ArticleDetail, ArticleWithCategories, CreateArticleInput, LandingArticles,
};
use crate::validation::{FieldErrors, ValidationError};

/// Number of articles on the landing page (1 main + 8 secondary)
const LANDING_ARTICLE_COUNT: i64 = 9;

/// Search results are capped regardless of how broad the query is
const SEARCH_RESULT_CAP: i64 = 10;

/// Cache TTL for article lists (10 minutes)
const ARTICLE_LIST_CACHE_TTL_SECS: u64 = 600;

/// Cache key prefixes
const CACHE_KEY_LANDING: &str = "articles:landing";
const CACHE_KEY_MOST_VIEWED: &str = "articles:most-viewed:";

/// Error types for article service operations
#[derive(Debug, thiserror::Error)]
pub enum ArticleServiceError {
    /// Article not found
    #[error("Article not found: {0}")]
    NotFound(i64),

    /// Validation error
    #[error("Validation error")]
    Validation(#[from] ValidationError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Article service
pub struct ArticleService {
    repo: Arc<dyn ArticleRepository>,
    cache: Arc<MemoryCache>,
    cache_ttl: Duration,
}

impl ArticleService {
    /// Create a new article service
    pub fn new(repo: Arc<dyn ArticleRepository>, cache: Arc<MemoryCache>) -> Self {
        Self {
            repo,
            cache,
            cache_ttl: Duration::from_secs(ARTICLE_LIST_CACHE_TTL_SECS),
        }
    }

    /// Create a new article service with custom cache TTL
    pub fn with_cache_ttl(
        repo: Arc<dyn ArticleRepository>,
        cache: Arc<MemoryCache>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            repo,
            cache,
            cache_ttl,
        }
    }

    /// Landing page selection: the newest article takes the main slot,
    /// the next eight fill the secondary grid. An empty archive yields an
    /// empty split, not an error.
    pub async fn landing(&self) -> Result<LandingArticles, ArticleServiceError> {
        if let Some(landing) = self
            .cache
            .get::<LandingArticles>(CACHE_KEY_LANDING)
            .await
            .ok()
            .flatten()
        {
            return Ok(landing);
        }

        let articles = self
            .repo
            .list_recent(LANDING_ARTICLE_COUNT)
            .await
            .context("Failed to list recent articles")?;

        let mut with_categories = Vec::with_capacity(articles.len());
        for article in articles {
            let categories = self
                .repo
                .categories_for(article.id)
                .await
                .context("Failed to load article categories")?;
            with_categories.push(ArticleWithCategories {
                article,
                categories,
            });
        }

        let mut rest = with_categories.into_iter();
        let landing = LandingArticles {
            main_article: rest.next(),
            smaller_articles: rest.collect(),
        };

        let _ = self.cache.set(CACHE_KEY_LANDING, &landing, self.cache_ttl).await;

        Ok(landing)
    }

    /// Articles ordered by view count descending, truncated to `limit`.
    pub async fn most_viewed(&self, limit: i64) -> Result<Vec<Article>, ArticleServiceError> {
        let limit = limit.clamp(1, 50);

        let cache_key = format!("{}{}", CACHE_KEY_MOST_VIEWED, limit);
        if let Some(articles) = self
            .cache
            .get::<Vec<Article>>(&cache_key)
            .await
            .ok()
            .flatten()
        {
            return Ok(articles);
        }

        let articles = self
            .repo
            .list_most_viewed(limit)
            .await
            .context("Failed to list most viewed articles")?;

        let _ = self.cache.set(&cache_key, &articles, self.cache_ttl).await;

        Ok(articles)
    }

    /// Headline search, capped at ten results. A blank query is answered
    /// with the ten most recent articles instead of an error; the policy
    /// choice is recorded in DESIGN.md.
    pub async fn search(&self, query: &str) -> Result<Vec<Article>, ArticleServiceError> {
        let query = query.trim();

        let articles = if query.is_empty() {
            self.repo
                .list_recent(SEARCH_RESULT_CAP)
                .await
                .context("Failed to list recent articles")?
        } else {
            self.repo
                .search_headlines(query, SEARCH_RESULT_CAP)
                .await
                .context("Failed to search articles")?
        };

        Ok(articles)
    }

    /// Article detail with categories and authors attached.
    pub async fn get(&self, id: i64) -> Result<ArticleDetail, ArticleServiceError> {
        let article = self
            .repo
            .get_by_id(id)
            .await
            .context("Failed to get article")?
            .ok_or(ArticleServiceError::NotFound(id))?;

        let categories = self
            .repo
            .categories_for(id)
            .await
            .context("Failed to load article categories")?;
        let authors = self
            .repo
            .authors_for(id)
            .await
            .context("Failed to load article authors")?;

        Ok(ArticleDetail {
            article,
            categories,
            authors,
        })
    }

    /// Best-effort view counter bump. The result exists so callers can log
    /// a failure; dropping it is fine, the count is then simply stale.
    pub async fn record_view(&self, id: i64) -> anyhow::Result<bool> {
        self.repo
            .increment_views(id)
            .await
            .context("Failed to record article view")
    }

    /// Create a new article
    ///
    /// # Errors
    /// - `Validation` if headline, summary or body is blank
    pub async fn create(&self, input: CreateArticleInput) -> Result<Article, ArticleServiceError> {
        validate_create_input(&input)?;

        let article = self
            .repo
            .create(&input)
            .await
            .context("Failed to create article")?;

        self.invalidate_list_cache().await;

        Ok(article)
    }

    /// Delete an article
    ///
    /// # Errors
    /// - `NotFound` if the article does not exist
    pub async fn delete(&self, id: i64) -> Result<(), ArticleServiceError> {
        let deleted = self
            .repo
            .delete(id)
            .await
            .context("Failed to delete article")?;

        if deleted == 0 {
            return Err(ArticleServiceError::NotFound(id));
        }

        self.invalidate_list_cache().await;

        Ok(())
    }

    async fn invalidate_list_cache(&self) {
        let _ = self.cache.delete_pattern("articles:*").await;
        let _ = self.cache.delete_pattern("category:*").await;
        let _ = self.cache.delete_pattern("authors:*").await;
    }
}

fn validate_create_input(input: &CreateArticleInput) -> Result<(), ValidationError> {
    let mut errors = FieldErrors::new();
    if input.headline.trim().is_empty() {
        errors.push("headline", "Headline is required");
    }
    if input.summary.trim().is_empty() {
        errors.push("summary", "Summary is required");
    }
    if input.body.trim().is_empty() {
        errors.push("body", "Body is required");
    }
    errors.into_result()
}
