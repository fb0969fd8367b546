//! Category model

use serde::{Deserialize, Serialize};

use crate::models::Article;

/// Category entity. Titles are unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub title: String,
}

/// Category with its articles, ordered by view count descending
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryWithArticles {
    #[serde(flatten)]
    pub category: Category,
    pub articles: Vec<Article>,
}

/// Input for creating a new category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryInput {
    pub title: String,
}
