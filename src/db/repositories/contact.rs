//! Contact submission repository
//!
//! Write-once storage for contact form submissions: create and list only,
//! no update or delete path.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool};
use std::sync::Arc;

use crate::models::{ContactInput, ContactSubmission};

/// Contact submission repository trait
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Store a submission
    async fn create(&self, input: &ContactInput) -> Result<ContactSubmission>;

    /// List submissions in insertion order
    async fn list(&self) -> Result<Vec<ContactSubmission>>;
}

/// SQLx-based contact repository implementation
pub struct SqlxContactRepository {
    pool: SqlitePool,
}

impl SqlxContactRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a boxed repository for use with dependency injection
    pub fn boxed(pool: SqlitePool) -> Arc<dyn ContactRepository> {
        Arc::new(Self::new(pool))
    }
}

#[async_trait]
impl ContactRepository for SqlxContactRepository {
    async fn create(&self, input: &ContactInput) -> Result<ContactSubmission> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO contact_submissions (name, email, subject, message, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.subject)
        .bind(&input.message)
        .bind(now)
        .execute(&self.pool)
        .await
        .context("Failed to store contact submission")?;

        Ok(ContactSubmission {
            id: result.last_insert_rowid(),
            name: input.name.clone(),
            email: input.email.clone(),
            subject: input.subject.clone(),
            message: input.message.clone(),
            created_at: now,
        })
    }

    async fn list(&self) -> Result<Vec<ContactSubmission>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, email, subject, message, created_at
            FROM contact_submissions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list contact submissions")?;

        Ok(rows
            .iter()
            .map(|row| ContactSubmission {
                id: row.get("id"),
                name: row.get("name"),
                email: row.get("email"),
                subject: row.get("subject"),
                message: row.get("message"),
                created_at: row.get("created_at"),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_test_pool, migrations};

    async fn setup_test_repo() -> SqlxContactRepository {
        let pool = create_test_pool().await.expect("Failed to create test pool");
        migrations::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");
        SqlxContactRepository::new(pool)
    }

    fn submission(subject: &str) -> ContactInput {
        ContactInput {
            name: "Reader".to_string(),
            email: "reader@example.com".to_string(),
            subject: subject.to_string(),
            message: "Hello newsroom".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_list_in_insertion_order() {
        let repo = setup_test_repo().await;

        let first = repo.create(&submission("First")).await.expect("create");
        let second = repo.create(&submission("Second")).await.expect("create");
        assert!(second.id > first.id);

        let all = repo.list().await.expect("list");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].subject, "First");
        assert_eq!(all[1].subject, "Second");
    }

    #[tokio::test]
    async fn test_stored_fields_round_trip() {
        let repo = setup_test_repo().await;
        repo.create(&submission("Typo on page 3")).await.expect("create");

        let all = repo.list().await.expect("list");
        assert_eq!(all[0].name, "Reader");
        assert_eq!(all[0].email, "reader@example.com");
        assert_eq!(all[0].message, "Hello newsroom");
    }
}
