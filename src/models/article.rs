//! Article model
//!
//! This module provides:
//! - `Article` entity representing a published content unit
//! - Composite shapes for the reading surfaces (landing split, detail view)
//! - Input type for creating articles

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Author, Category};

/// Article entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Unique identifier
    pub id: i64,
    /// Headline shown in listings and detail views
    pub headline: String,
    /// Short summary shown in listings
    pub summary: String,
    /// Full article body
    pub body: String,
    /// Image reference (URL or asset path)
    #[serde(default)]
    pub image: Option<String>,
    /// View count. Never decreases; bumped on every detail read.
    #[serde(default)]
    pub view_count: i64,
    /// Whether the editors have promoted this article
    #[serde(default)]
    pub editors_choice: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Article with its categories attached, as shown on listing surfaces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleWithCategories {
    #[serde(flatten)]
    pub article: Article,
    pub categories: Vec<Category>,
}

/// Article with full relations, as shown on the detail page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDetail {
    #[serde(flatten)]
    pub article: Article,
    pub categories: Vec<Category>,
    pub authors: Vec<Author>,
}

/// Landing page split: the newest article is promoted to the main slot,
/// the rest fill the secondary grid. Both slots are empty when the
/// archive is empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LandingArticles {
    pub main_article: Option<ArticleWithCategories>,
    pub smaller_articles: Vec<ArticleWithCategories>,
}

/// Input for creating a new article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateArticleInput {
    pub headline: String,
    pub summary: String,
    pub body: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub editors_choice: bool,
    /// Categories to link (many-to-many)
    #[serde(default)]
    pub category_ids: Vec<i64>,
    /// Authors to link (many-to-many)
    #[serde(default)]
    pub author_ids: Vec<i64>,
}

impl CreateArticleInput {
    pub fn new(headline: String, summary: String, body: String) -> Self {
        Self {
            headline,
            summary,
            body,
            image: None,
            editors_choice: false,
            category_ids: Vec::new(),
            author_ids: Vec::new(),
        }
    }

    pub fn with_categories(mut self, category_ids: Vec<i64>) -> Self {
        self.category_ids = category_ids;
        self
    }

    pub fn with_authors(mut self, author_ids: Vec<i64>) -> Self {
        self.author_ids = author_ids;
        self
    }

    pub fn with_editors_choice(mut self, editors_choice: bool) -> Self {
        self.editors_choice = editors_choice;
        self
    }
}
