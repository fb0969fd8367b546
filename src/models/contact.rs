//! Contact submission model
//!
//! Submissions are write-once: the repository exposes create and list
//! only, there is no update or delete path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored contact form submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Incoming contact form payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
