//! Category repository
//!
//! Database operations for categories. Titles are unique; the article
//! listing for a category lives on the article repository.

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use std::sync::Arc;

use crate::models::{Category, CreateCategoryInput};

/// Category repository trait
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Create a new category
    async fn create(&self, input: &CreateCategoryInput) -> Result<Category>;

    /// Get category by ID
    async fn get_by_id(&self, id: i64) -> Result<Option<Category>>;

    /// Get category by its unique title
    async fn get_by_title(&self, title: &str) -> Result<Option<Category>>;

    /// Check if a title is already taken
    async fn exists_by_title(&self, title: &str) -> Result<bool>;

    /// List all categories by title
    async fn list(&self) -> Result<Vec<Category>>;

    /// Delete a category. Returns the number of rows removed.
    async fn delete(&self, id: i64) -> Result<u64>;
}

/// SQLx-based category repository implementation
pub struct SqlxCategoryRepository {
    pool: SqlitePool,
}

impl SqlxCategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a boxed repository for use with dependency injection
    pub fn boxed(pool: SqlitePool) -> Arc<dyn CategoryRepository> {
        Arc::new(Self::new(pool))
    }
}

#[async_trait]
impl CategoryRepository for SqlxCategoryRepository {
    async fn create(&self, input: &CreateCategoryInput) -> Result<Category> {
        let result = sqlx::query("INSERT INTO categories (title) VALUES (?)")
            .bind(&input.title)
            .execute(&self.pool)
            .await
            .context("Failed to create category")?;

        Ok(Category {
            id: result.last_insert_rowid(),
            title: input.title.clone(),
        })
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Category>> {
        let row = sqlx::query("SELECT id, title FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to get category by ID")?;

        Ok(row.map(|row| row_to_category(&row)))
    }

    async fn get_by_title(&self, title: &str) -> Result<Option<Category>> {
        let row = sqlx::query("SELECT id, title FROM categories WHERE title = ?")
            .bind(title)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to get category by title")?;

        Ok(row.map(|row| row_to_category(&row)))
    }

    async fn exists_by_title(&self, title: &str) -> Result<bool> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM categories WHERE title = ?")
            .bind(title)
            .fetch_one(&self.pool)
            .await
            .context("Failed to check category title existence")?;

        let count: i64 = row.get("count");
        Ok(count > 0)
    }

    async fn list(&self) -> Result<Vec<Category>> {
        let rows = sqlx::query("SELECT id, title FROM categories ORDER BY title")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list categories")?;

        Ok(rows.iter().map(row_to_category).collect())
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete category")?;

        Ok(result.rows_affected())
    }
}

fn row_to_category(row: &sqlx::sqlite::SqliteRow) -> Category {
    Category {
        id: row.get("id"),
        title: row.get("title"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_test_pool, migrations};

    async fn setup_test_repo() -> SqlxCategoryRepository {
        let pool = create_test_pool().await.expect("Failed to create test pool");
        migrations::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");
        SqlxCategoryRepository::new(pool)
    }

    fn input(title: &str) -> CreateCategoryInput {
        CreateCategoryInput {
            title: title.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_by_title() {
        let repo = setup_test_repo().await;

        let created = repo.create(&input("Politics")).await.expect("create");
        assert!(created.id > 0);

        let found = repo
            .get_by_title("Politics")
            .await
            .expect("get")
            .expect("Category not found");
        assert_eq!(found, created);

        let by_id = repo
            .get_by_id(created.id)
            .await
            .expect("get")
            .expect("Category not found");
        assert_eq!(by_id, created);

        assert!(repo
            .get_by_title("Missing")
            .await
            .expect("get")
            .is_none());
    }

    #[tokio::test]
    async fn test_duplicate_title_rejected_by_store() {
        let repo = setup_test_repo().await;
        repo.create(&input("Culture")).await.expect("create");
        assert!(repo.create(&input("Culture")).await.is_err());
    }

    #[tokio::test]
    async fn test_exists_by_title() {
        let repo = setup_test_repo().await;
        assert!(!repo.exists_by_title("Tech").await.expect("exists"));
        repo.create(&input("Tech")).await.expect("create");
        assert!(repo.exists_by_title("Tech").await.expect("exists"));
    }

    #[tokio::test]
    async fn test_list_sorted_by_title() {
        let repo = setup_test_repo().await;
        repo.create(&input("Weather")).await.expect("create");
        repo.create(&input("Economy")).await.expect("create");

        let titles: Vec<String> = repo
            .list()
            .await
            .expect("list")
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, vec!["Economy", "Weather"]);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = setup_test_repo().await;
        let category = repo.create(&input("Fleeting")).await.expect("create");
        assert_eq!(repo.delete(category.id).await.expect("delete"), 1);
        assert_eq!(repo.delete(category.id).await.expect("delete"), 0);
    }
}
