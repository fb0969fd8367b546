//! Article repository
//!
//! Database operations for articles and their category/author links.
//! Provides the `ArticleRepository` trait and its SQLx implementation.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool};
use std::sync::Arc;

use crate::models::{Article, Author, Category, CreateArticleInput};

/// Article repository trait
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Create a new article and link its categories and authors
    async fn create(&self, input: &CreateArticleInput) -> Result<Article>;

    /// Get article by ID
    async fn get_by_id(&self, id: i64) -> Result<Option<Article>>;

    /// List articles ordered by creation time, newest first
    async fn list_recent(&self, limit: i64) -> Result<Vec<Article>>;

    /// List articles ordered by view count, highest first
    async fn list_most_viewed(&self, limit: i64) -> Result<Vec<Article>>;

    /// List a category's articles ordered by view count, highest first
    async fn list_by_category(&self, category_id: i64) -> Result<Vec<Article>>;

    /// Case-insensitive substring search on headlines
    async fn search_headlines(&self, query: &str, limit: i64) -> Result<Vec<Article>>;

    /// Atomically bump the view counter. Returns false when the article
    /// no longer exists.
    async fn increment_views(&self, id: i64) -> Result<bool>;

    /// Delete an article. Returns the number of rows removed.
    async fn delete(&self, id: i64) -> Result<u64>;

    /// Count all articles
    async fn count(&self) -> Result<i64>;

    /// Categories linked to an article
    async fn categories_for(&self, article_id: i64) -> Result<Vec<Category>>;

    /// Authors linked to an article
    async fn authors_for(&self, article_id: i64) -> Result<Vec<Author>>;
}

/// SQLx-based article repository implementation
pub struct SqlxArticleRepository {
    pool: SqlitePool,
}

impl SqlxArticleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a boxed repository for use with dependency injection
    pub fn boxed(pool: SqlitePool) -> Arc<dyn ArticleRepository> {
        Arc::new(Self::new(pool))
    }
}

#[async_trait]
impl ArticleRepository for SqlxArticleRepository {
    async fn create(&self, input: &CreateArticleInput) -> Result<Article> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO articles (headline, summary, body, image, editors_choice, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.headline)
        .bind(&input.summary)
        .bind(&input.body)
        .bind(&input.image)
        .bind(input.editors_choice)
        .bind(now)
        .execute(&self.pool)
        .await
        .context("Failed to create article")?;

        let id = result.last_insert_rowid();

        for category_id in &input.category_ids {
            sqlx::query(
                "INSERT OR IGNORE INTO article_categories (article_id, category_id) VALUES (?, ?)",
            )
            .bind(id)
            .bind(category_id)
            .execute(&self.pool)
            .await
            .context("Failed to link article category")?;
        }

        for author_id in &input.author_ids {
            sqlx::query(
                "INSERT OR IGNORE INTO article_authors (article_id, author_id) VALUES (?, ?)",
            )
            .bind(id)
            .bind(author_id)
            .execute(&self.pool)
            .await
            .context("Failed to link article author")?;
        }

        Ok(Article {
            id,
            headline: input.headline.clone(),
            summary: input.summary.clone(),
            body: input.body.clone(),
            image: input.image.clone(),
            view_count: 0,
            editors_choice: input.editors_choice,
            created_at: now,
        })
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Article>> {
        let row = sqlx::query(
            r#"
            SELECT id, headline, summary, body, image, view_count, editors_choice, created_at
            FROM articles
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to get article by ID")?;

        Ok(row.map(|row| row_to_article(&row)))
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Article>> {
        let rows = sqlx::query(
            r#"
            SELECT id, headline, summary, body, image, view_count, editors_choice, created_at
            FROM articles
            ORDER BY created_at DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list recent articles")?;

        Ok(rows.iter().map(row_to_article).collect())
    }

    async fn list_most_viewed(&self, limit: i64) -> Result<Vec<Article>> {
        let rows = sqlx::query(
            r#"
            SELECT id, headline, summary, body, image, view_count, editors_choice, created_at
            FROM articles
            ORDER BY view_count DESC, created_at DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list most viewed articles")?;

        Ok(rows.iter().map(row_to_article).collect())
    }

    async fn list_by_category(&self, category_id: i64) -> Result<Vec<Article>> {
        let rows = sqlx::query(
            r#"
            SELECT a.id, a.headline, a.summary, a.body, a.image, a.view_count, a.editors_choice, a.created_at
            FROM articles a
            INNER JOIN article_categories ac ON ac.article_id = a.id
            WHERE ac.category_id = ?
            ORDER BY a.view_count DESC, a.id DESC
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list articles by category")?;

        Ok(rows.iter().map(row_to_article).collect())
    }

    async fn search_headlines(&self, query: &str, limit: i64) -> Result<Vec<Article>> {
        // LIKE treats % and _ as wildcards; search terms are literal
        let escaped = query
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_");
        let pattern = format!("%{}%", escaped);

        let rows = sqlx::query(
            r#"
            SELECT id, headline, summary, body, image, view_count, editors_choice, created_at
            FROM articles
            WHERE headline LIKE ? ESCAPE '\'
            ORDER BY created_at DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(&pattern)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .context("Failed to search articles")?;

        Ok(rows.iter().map(row_to_article).collect())
    }

    async fn increment_views(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("UPDATE articles SET view_count = view_count + 1 WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to increment article views")?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        // Link rows go with the article via ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete article")?;

        Ok(result.rows_affected())
    }

    async fn count(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM articles")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count articles")?;

        Ok(row.get("count"))
    }

    async fn categories_for(&self, article_id: i64) -> Result<Vec<Category>> {
        let rows = sqlx::query(
            r#"
            SELECT c.id, c.title
            FROM categories c
            INNER JOIN article_categories ac ON ac.category_id = c.id
            WHERE ac.article_id = ?
            ORDER BY c.title
            "#,
        )
        .bind(article_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to load article categories")?;

        Ok(rows
            .iter()
            .map(|row| Category {
                id: row.get("id"),
                title: row.get("title"),
            })
            .collect())
    }

    async fn authors_for(&self, article_id: i64) -> Result<Vec<Author>> {
        let rows = sqlx::query(
            r#"
            SELECT a.id, a.name, a.picture
            FROM authors a
            INNER JOIN article_authors aa ON aa.author_id = a.id
            WHERE aa.article_id = ?
            ORDER BY a.name
            "#,
        )
        .bind(article_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to load article authors")?;

        Ok(rows
            .iter()
            .map(|row| Author {
                id: row.get("id"),
                name: row.get("name"),
                picture: row.get("picture"),
            })
            .collect())
    }
}

fn row_to_article(row: &sqlx::sqlite::SqliteRow) -> Article {
    Article {
        id: row.get("id"),
        headline: row.get("headline"),
        summary: row.get("summary"),
        body: row.get("body"),
        image: row.get("image"),
        view_count: row.get("view_count"),
        editors_choice: row.get("editors_choice"),
        created_at: row.get("created_at"),
    }
}
