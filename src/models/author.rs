//! Author model

use serde::{Deserialize, Serialize};

/// Author entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub name: String,
    /// Portrait image reference
    #[serde(default)]
    pub picture: Option<String>,
}

/// Author ranked by article output, carrying the headline of their
/// highest-viewed article (or a placeholder when they have none).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopAuthor {
    #[serde(flatten)]
    pub author: Author,
    pub article_count: i64,
    pub top_headline: String,
}

/// Input for creating a new author
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAuthorInput {
    pub name: String,
    #[serde(default)]
    pub picture: Option<String>,
}
