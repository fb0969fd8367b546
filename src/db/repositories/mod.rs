//! Repository layer
//!
//! Data access traits and their SQLx implementations. Repositories are
//! the sole mediators between services and the database.

pub mod article;
pub mod author;
pub mod category;
pub mod contact;

pub use article::{ArticleRepository, SqlxArticleRepository};
pub use author::{AuthorRepository, SqlxAuthorRepository};
pub use category::{CategoryRepository, SqlxCategoryRepository};
pub use contact::{ContactRepository, SqlxContactRepository};
