//! Contact service
//!
//! Validates and stores contact form submissions. Submissions are
//! write-once; the admin surface can only list them.

use anyhow::Context;
use std::sync::Arc;

use crate::db::repositories::ContactRepository;
use crate::models::{ContactInput, ContactSubmission};
use crate::validation::{validate_contact, ValidationError};

/// Error types for contact service operations
#[derive(Debug, thiserror::Error)]
pub enum ContactServiceError {
    /// Validation error
    #[error("Validation error")]
    Validation(#[from] ValidationError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Contact service
pub struct ContactService {
    repo: Arc<dyn ContactRepository>,
}

impl ContactService {
    pub fn new(repo: Arc<dyn ContactRepository>) -> Self {
        Self { repo }
    }

    /// Validate and store a submission.
    pub async fn submit(
        &self,
        input: ContactInput,
    ) -> Result<ContactSubmission, ContactServiceError> {
        validate_contact(&input)?;

        let submission = self
            .repo
            .create(&input)
            .await
            .context("Failed to store contact submission")?;

        Ok(submission)
    }

    /// List all submissions in insertion order.
    pub async fn list(&self) -> Result<Vec<ContactSubmission>, ContactServiceError> {
        let submissions = self
            .repo
            .list()
            .await
            .context("Failed to list contact submissions")?;
        Ok(submissions)
    }
}
