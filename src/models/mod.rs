//! Data models
//!
//! Domain entities for the Newsdesk system, plus the ephemeral
//! client-held records (plans, card previews) that never touch storage.

pub mod article;
pub mod author;
pub mod card;
pub mod category;
pub mod contact;
pub mod plan;

pub use article::{
    Article, ArticleDetail, ArticleWithCategories, CreateArticleInput, LandingArticles,
};
pub use author::{Author, CreateAuthorInput, TopAuthor};
pub use card::{CardBrand, SavedCard};
pub use category::{Category, CategoryWithArticles, CreateCategoryInput};
pub use contact::{ContactInput, ContactSubmission};
pub use plan::{find_plan, Plan, PLAN_CATALOG};
