//! Author service
//!
//! Business logic for author management and the "top authors" widget:
//! authors ranked by article output, each carrying their highest-viewed
//! headline or a placeholder when they have none.

use anyhow::Context;
use std::sync::Arc;

use crate::db::repositories::AuthorRepository;
use crate::models::{Author, CreateAuthorInput, TopAuthor};
use crate::validation::{FieldErrors, ValidationError};

/// Placeholder headline for ranked authors who have not published yet
pub const NO_ARTICLES_PLACEHOLDER: &str = "No articles yet";

/// Error types for author service operations
#[derive(Debug, thiserror::Error)]
pub enum AuthorServiceError {
    /// Author not found
    #[error("Author not found: {0}")]
    NotFound(i64),

    /// Validation error
    #[error("Validation error")]
    Validation(#[from] ValidationError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Author service
pub struct AuthorService {
    repo: Arc<dyn AuthorRepository>,
}

impl AuthorService {
    pub fn new(repo: Arc<dyn AuthorRepository>) -> Self {
        Self { repo }
    }

    /// Create a new author
    pub async fn create(&self, input: CreateAuthorInput) -> Result<Author, AuthorServiceError> {
        let mut errors = FieldErrors::new();
        if input.name.trim().is_empty() {
            errors.push("name", "Name is required");
        }
        errors.into_result()?;

        let author = self
            .repo
            .create(&input)
            .await
            .context("Failed to create author")?;

        Ok(author)
    }

    /// List all authors
    pub async fn list(&self) -> Result<Vec<Author>, AuthorServiceError> {
        let authors = self.repo.list().await.context("Failed to list authors")?;
        Ok(authors)
    }

    /// Authors ranked by article count, each with the headline of their
    /// highest-viewed article. Authors without articles are still listed,
    /// carrying the placeholder headline.
    pub async fn top_authors(&self, limit: i64) -> Result<Vec<TopAuthor>, AuthorServiceError> {
        let limit = limit.clamp(1, 20);

        let ranked = self
            .repo
            .top_by_article_count(limit)
            .await
            .context("Failed to rank authors")?;

        let mut top = Vec::with_capacity(ranked.len());
        for (author, article_count) in ranked {
            let top_headline = self
                .repo
                .top_headline_for(author.id)
                .await
                .context("Failed to find author's top article")?
                .unwrap_or_else(|| NO_ARTICLES_PLACEHOLDER.to_string());

            top.push(TopAuthor {
                author,
                article_count,
                top_headline,
            });
        }

        Ok(top)
    }

    /// Delete an author
    ///
    /// # Errors
    /// - `NotFound` if the author does not exist
    pub async fn delete(&self, id: i64) -> Result<(), AuthorServiceError> {
        let deleted = self
            .repo
            .delete(id)
            .await
            .context("Failed to delete author")?;

        if deleted == 0 {
            return Err(AuthorServiceError::NotFound(id));
        }

        Ok(())
    }
}
