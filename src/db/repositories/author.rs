//! Author repository
//!
//! Database operations for authors, including the by-output ranking used
//! on the "top authors" widget.

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use std::sync::Arc;

use crate::models::{Author, CreateAuthorInput};

/// Author repository trait
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Create a new author
    async fn create(&self, input: &CreateAuthorInput) -> Result<Author>;

    /// Get author by ID
    async fn get_by_id(&self, id: i64) -> Result<Option<Author>>;

    /// List all authors by name
    async fn list(&self) -> Result<Vec<Author>>;

    /// Delete an author. Returns the number of rows removed.
    async fn delete(&self, id: i64) -> Result<u64>;

    /// Authors ranked by how many articles they have written,
    /// most prolific first
    async fn top_by_article_count(&self, limit: i64) -> Result<Vec<(Author, i64)>>;

    /// Headline of the author's highest-viewed article, if any
    async fn top_headline_for(&self, author_id: i64) -> Result<Option<String>>;
}

/// SQLx-based author repository implementation
pub struct SqlxAuthorRepository {
    pool: SqlitePool,
}

impl SqlxAuthorRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a boxed repository for use with dependency injection
    pub fn boxed(pool: SqlitePool) -> Arc<dyn AuthorRepository> {
        Arc::new(Self::new(pool))
    }
}

#[async_trait]
impl AuthorRepository for SqlxAuthorRepository {
    async fn create(&self, input: &CreateAuthorInput) -> Result<Author> {
        let result = sqlx::query("INSERT INTO authors (name, picture) VALUES (?, ?)")
            .bind(&input.name)
            .bind(&input.picture)
            .execute(&self.pool)
            .await
            .context("Failed to create author")?;

        Ok(Author {
            id: result.last_insert_rowid(),
            name: input.name.clone(),
            picture: input.picture.clone(),
        })
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Author>> {
        let row = sqlx::query("SELECT id, name, picture FROM authors WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to get author by ID")?;

        Ok(row.map(|row| row_to_author(&row)))
    }

    async fn list(&self) -> Result<Vec<Author>> {
        let rows = sqlx::query("SELECT id, name, picture FROM authors ORDER BY name, id")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list authors")?;

        Ok(rows.iter().map(row_to_author).collect())
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        // Link rows cascade; articles themselves stay
        let result = sqlx::query("DELETE FROM authors WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete author")?;

        Ok(result.rows_affected())
    }

    async fn top_by_article_count(&self, limit: i64) -> Result<Vec<(Author, i64)>> {
        let rows = sqlx::query(
            r#"
            SELECT a.id, a.name, a.picture, COUNT(aa.article_id) AS article_count
            FROM authors a
            LEFT JOIN article_authors aa ON aa.author_id = a.id
            GROUP BY a.id
            ORDER BY article_count DESC, a.id ASC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .context("Failed to rank authors")?;

        Ok(rows
            .iter()
            .map(|row| (row_to_author(row), row.get("article_count")))
            .collect())
    }

    async fn top_headline_for(&self, author_id: i64) -> Result<Option<String>> {
        let row = sqlx::query(
            r#"
            SELECT ar.headline
            FROM articles ar
            INNER JOIN article_authors aa ON aa.article_id = ar.id
            WHERE aa.author_id = ?
            ORDER BY ar.view_count DESC, ar.id ASC
            LIMIT 1
            "#,
        )
        .bind(author_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to find author's top article")?;

        Ok(row.map(|row| row.get("headline")))
    }
}

fn row_to_author(row: &sqlx::sqlite::SqliteRow) -> Author {
    Author {
        id: row.get("id"),
        name: row.get("name"),
        picture: row.get("picture"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::article::{ArticleRepository, SqlxArticleRepository};
    use crate::db::{create_test_pool, migrations};
    use crate::models::CreateArticleInput;

    async fn setup_test_repo() -> (SqlitePool, SqlxAuthorRepository) {
        let pool = create_test_pool().await.expect("Failed to create test pool");
        migrations::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");
        let repo = SqlxAuthorRepository::new(pool.clone());
        (pool, repo)
    }

    fn author_input(name: &str) -> CreateAuthorInput {
        CreateAuthorInput {
            name: name.to_string(),
            picture: None,
        }
    }

    async fn create_article_by(
        pool: &SqlitePool,
        headline: &str,
        author_id: i64,
        views: i64,
    ) -> i64 {
        let articles = SqlxArticleRepository::new(pool.clone());
        let input = CreateArticleInput::new(
            headline.to_string(),
            "summary".to_string(),
            "body".to_string(),
        )
        .with_authors(vec![author_id]);
        let article = articles.create(&input).await.expect("Failed to create article");
        sqlx::query("UPDATE articles SET view_count = ? WHERE id = ?")
            .bind(views)
            .bind(article.id)
            .execute(pool)
            .await
            .expect("Failed to set views");
        article.id
    }

    #[tokio::test]
    async fn test_create_list_delete() {
        let (_pool, repo) = setup_test_repo().await;

        let anna = repo.create(&author_input("Anna")).await.expect("create");
        repo.create(&author_input("Bert")).await.expect("create");

        let found = repo
            .get_by_id(anna.id)
            .await
            .expect("get")
            .expect("Author not found");
        assert_eq!(found, anna);

        let authors = repo.list().await.expect("list");
        assert_eq!(authors.len(), 2);
        assert_eq!(authors[0].name, "Anna");

        assert_eq!(repo.delete(anna.id).await.expect("delete"), 1);
        assert_eq!(repo.delete(anna.id).await.expect("delete"), 0);
    }

    #[tokio::test]
    async fn test_top_by_article_count() {
        let (pool, repo) = setup_test_repo().await;

        let prolific = repo.create(&author_input("Prolific")).await.expect("create");
        let occasional = repo.create(&author_input("Occasional")).await.expect("create");
        repo.create(&author_input("Silent")).await.expect("create");

        for i in 0..3 {
            create_article_by(&pool, &format!("Story {}", i), prolific.id, i).await;
        }
        create_article_by(&pool, "One-off", occasional.id, 10).await;

        let ranked = repo.top_by_article_count(3).await.expect("rank");
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].0.name, "Prolific");
        assert_eq!(ranked[0].1, 3);
        assert_eq!(ranked[1].0.name, "Occasional");
        assert_eq!(ranked[1].1, 1);
        assert_eq!(ranked[2].1, 0);
    }

    #[tokio::test]
    async fn test_top_by_article_count_respects_limit() {
        let (_pool, repo) = setup_test_repo().await;
        for i in 0..5 {
            repo.create(&author_input(&format!("Author {}", i)))
                .await
                .expect("create");
        }
        let ranked = repo.top_by_article_count(3).await.expect("rank");
        assert_eq!(ranked.len(), 3);
    }

    #[tokio::test]
    async fn test_top_headline_picks_highest_viewed() {
        let (pool, repo) = setup_test_repo().await;

        let author = repo.create(&author_input("Anna")).await.expect("create");
        create_article_by(&pool, "Quiet piece", author.id, 4).await;
        create_article_by(&pool, "Banger", author.id, 900).await;

        let headline = repo
            .top_headline_for(author.id)
            .await
            .expect("Failed to query");
        assert_eq!(headline.as_deref(), Some("Banger"));
    }

    #[tokio::test]
    async fn test_top_headline_none_without_articles() {
        let (_pool, repo) = setup_test_repo().await;
        let author = repo.create(&author_input("Silent")).await.expect("create");
        let headline = repo
            .top_headline_for(author.id)
            .await
            .expect("Failed to query");
        assert!(headline.is_none());
    }

    #[tokio::test]
    async fn test_delete_author_keeps_articles() {
        let (pool, repo) = setup_test_repo().await;
        let articles = SqlxArticleRepository::new(pool.clone());

        let author = repo.create(&author_input("Leaving")).await.expect("create");
        let article_id = create_article_by(&pool, "Stays", author.id, 0).await;

        repo.delete(author.id).await.expect("delete");

        let article = articles
            .get_by_id(article_id)
            .await
            .expect("get")
            .expect("article should survive author deletion");
        assert_eq!(article.headline, "Stays");
        assert!(articles
            .authors_for(article_id)
            .await
            .expect("authors_for")
            .is_empty());
    }
}
