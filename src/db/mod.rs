//! Database layer
//!
//! SQLite-backed persistence for the Newsdesk system. The crate ships a
//! single driver for single-binary deployment; repositories receive the
//! pool and are the only mediators of reads and writes.
//!
//! # Usage
//!
//! ```ignore
//! use newsdesk::config::DatabaseConfig;
//! use newsdesk::db::{create_pool, migrations};
//!
//! let pool = create_pool(&config).await?;
//! migrations::run_migrations(&pool).await?;
//! ```

pub mod migrations;
pub mod pool;
pub mod repositories;

pub use pool::{create_pool, create_test_pool};
