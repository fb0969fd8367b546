//! Category service
//!
//! Business logic for category management:
//! - Create with title uniqueness
//! - Category page lookup (articles ordered by views)
//! - Delete with cache invalidation

use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{CacheLayer, MemoryCache};
use crate::db::repositories::{ArticleRepository, CategoryRepository};
use crate::models::{Category, CategoryWithArticles, CreateCategoryInput};
use crate::validation::{FieldErrors, ValidationError};

/// Cache TTL for category views (10 minutes)
const CATEGORY_CACHE_TTL_SECS: u64 = 600;

/// Cache key prefixes
const CACHE_KEY_CATEGORY_BY_TITLE: &str = "category:title:";
const CACHE_KEY_CATEGORY_LIST: &str = "category:list";

/// Error types for category service operations
#[derive(Debug, thiserror::Error)]
pub enum CategoryServiceError {
    /// Category not found
    #[error("Category not found: {0}")]
    NotFound(String),

    /// Category title already exists
    #[error("Category title already exists: {0}")]
    DuplicateTitle(String),

    /// Validation error
    #[error("Validation error")]
    Validation(#[from] ValidationError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Category service
pub struct CategoryService {
    repo: Arc<dyn CategoryRepository>,
    article_repo: Arc<dyn ArticleRepository>,
    cache: Arc<MemoryCache>,
    cache_ttl: Duration,
}

impl CategoryService {
    pub fn new(
        repo: Arc<dyn CategoryRepository>,
        article_repo: Arc<dyn ArticleRepository>,
        cache: Arc<MemoryCache>,
    ) -> Self {
        Self {
            repo,
            article_repo,
            cache,
            cache_ttl: Duration::from_secs(CATEGORY_CACHE_TTL_SECS),
        }
    }

    /// Create a new category
    ///
    /// # Errors
    /// - `Validation` if the title is blank
    /// - `DuplicateTitle` if the title is already taken
    pub async fn create(
        &self,
        input: CreateCategoryInput,
    ) -> Result<Category, CategoryServiceError> {
        let mut errors = FieldErrors::new();
        if input.title.trim().is_empty() {
            errors.push("title", "Title is required");
        }
        errors.into_result()?;

        if self
            .repo
            .exists_by_title(&input.title)
            .await
            .context("Failed to check title uniqueness")?
        {
            return Err(CategoryServiceError::DuplicateTitle(input.title));
        }

        let category = self
            .repo
            .create(&input)
            .await
            .context("Failed to create category")?;

        self.invalidate_cache().await;

        Ok(category)
    }

    /// Category page: the category plus its articles ordered by view
    /// count descending.
    ///
    /// # Errors
    /// - `NotFound` if no category carries the title
    pub async fn by_title(&self, title: &str) -> Result<CategoryWithArticles, CategoryServiceError> {
        let cache_key = format!("{}{}", CACHE_KEY_CATEGORY_BY_TITLE, title);
        if let Some(view) = self
            .cache
            .get::<CategoryWithArticles>(&cache_key)
            .await
            .ok()
            .flatten()
        {
            return Ok(view);
        }

        let category = self
            .repo
            .get_by_title(title)
            .await
            .context("Failed to get category by title")?
            .ok_or_else(|| CategoryServiceError::NotFound(title.to_string()))?;

        let articles = self
            .article_repo
            .list_by_category(category.id)
            .await
            .context("Failed to list category articles")?;

        let view = CategoryWithArticles {
            category,
            articles,
        };

        let _ = self.cache.set(&cache_key, &view, self.cache_ttl).await;

        Ok(view)
    }

    /// List all categories
    pub async fn list(&self) -> Result<Vec<Category>, CategoryServiceError> {
        if let Some(list) = self
            .cache
            .get::<Vec<Category>>(CACHE_KEY_CATEGORY_LIST)
            .await
            .ok()
            .flatten()
        {
            return Ok(list);
        }

        let list = self.repo.list().await.context("Failed to list categories")?;

        let _ = self
            .cache
            .set(CACHE_KEY_CATEGORY_LIST, &list, self.cache_ttl)
            .await;

        Ok(list)
    }

    /// Delete a category
    ///
    /// # Errors
    /// - `NotFound` if the category does not exist
    pub async fn delete(&self, id: i64) -> Result<(), CategoryServiceError> {
        let deleted = self
            .repo
            .delete(id)
            .await
            .context("Failed to delete category")?;

        if deleted == 0 {
            return Err(CategoryServiceError::NotFound(id.to_string()));
        }

        self.invalidate_cache().await;

        Ok(())
    }

    async fn invalidate_cache(&self) {
        let _ = self.cache.delete_pattern("category:*").await;
        // Landing articles embed category lists
        let _ = self.cache.delete_pattern("articles:*").await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::{
        ArticleRepository as _, SqlxArticleRepository, SqlxCategoryRepository,
    };
    use crate::db::{create_test_pool, migrations};
    use crate::models::CreateArticleInput;
    use sqlx::SqlitePool;

    async fn setup_service() -> (SqlitePool, CategoryService) {
        let pool = create_test_pool().await.expect("Failed to create test pool");
        migrations::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");
        let service = CategoryService::new(
            SqlxCategoryRepository::boxed(pool.clone()),
            SqlxArticleRepository::boxed(pool.clone()),
            Arc::new(MemoryCache::new()),
        );
        (pool, service)
    }

    fn input(title: &str) -> CreateCategoryInput {
        CreateCategoryInput {
            title: title.to_string(),
        }
    }

    async fn publish_in(pool: &SqlitePool, category_id: i64, headline: &str, views: i64) {
        let articles = SqlxArticleRepository::new(pool.clone());
        let article = articles
            .create(
                &CreateArticleInput::new(
                    headline.to_string(),
                    "summary".to_string(),
                    "body".to_string(),
                )
                .with_categories(vec![category_id]),
            )
            .await
            .expect("Failed to create article");
        sqlx::query("UPDATE articles SET view_count = ? WHERE id = ?")
            .bind(views)
            .bind(article.id)
            .execute(pool)
            .await
            .expect("Failed to set views");
    }

    #[tokio::test]
    async fn test_by_title_orders_articles_by_views() {
        let (pool, service) = setup_service().await;

        let sport = service.create(input("Sport")).await.expect("create");
        publish_in(&pool, sport.id, "Final recap", 40).await;
        publish_in(&pool, sport.id, "Transfer gossip", 300).await;

        let view = service.by_title("Sport").await.expect("by_title");
        assert_eq!(view.category.title, "Sport");
        assert_eq!(view.articles.len(), 2);
        assert_eq!(view.articles[0].headline, "Transfer gossip");
        assert_eq!(view.articles[1].headline, "Final recap");
    }

    #[tokio::test]
    async fn test_by_title_missing_is_not_found() {
        let (_pool, service) = setup_service().await;
        let err = service.by_title("Ghost").await.unwrap_err();
        assert!(matches!(err, CategoryServiceError::NotFound(title) if title == "Ghost"));
    }

    #[tokio::test]
    async fn test_duplicate_title_is_conflict() {
        let (_pool, service) = setup_service().await;
        service.create(input("Culture")).await.expect("create");
        let err = service.create(input("Culture")).await.unwrap_err();
        assert!(matches!(err, CategoryServiceError::DuplicateTitle(_)));
    }

    #[tokio::test]
    async fn test_blank_title_is_validation_error() {
        let (_pool, service) = setup_service().await;
        let err = service.create(input("  ")).await.unwrap_err();
        assert!(matches!(err, CategoryServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_category_is_not_found() {
        let (_pool, service) = setup_service().await;
        let err = service.delete(31337).await.unwrap_err();
        assert!(matches!(err, CategoryServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_invalidates_category_cache() {
        let (_pool, service) = setup_service().await;

        let news = service.create(input("News")).await.expect("create");
        // Warm the cache
        service.by_title("News").await.expect("by_title");

        service.delete(news.id).await.expect("delete");
        let err = service.by_title("News").await.unwrap_err();
        assert!(matches!(err, CategoryServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_is_sorted() {
        let (_pool, service) = setup_service().await;
        service.create(input("Zebra")).await.expect("create");
        service.create(input("Alpha")).await.expect("create");

        let titles: Vec<String> = service
            .list()
            .await
            .expect("list")
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, vec!["Alpha", "Zebra"]);
    }
}
