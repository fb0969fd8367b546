//! Services layer - Business logic
//!
//! Services implement the operations behind the HTTP actions:
//! coordinating repositories and cache, validating input, and mapping
//! failures into the error taxonomy (validation / not found / internal).

pub mod article;
pub mod author;
pub mod category;
pub mod contact;
pub mod email;

pub use article::{ArticleService, ArticleServiceError};
pub use author::{AuthorService, AuthorServiceError, NO_ARTICLES_PLACEHOLDER};
pub use category::{CategoryService, CategoryServiceError};
pub use contact::{ContactService, ContactServiceError};
pub use email::{EmailReceipt, EmailService, OutgoingEmail};
