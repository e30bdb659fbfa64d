//! Mod APK Hub Test Utils
//!
//! Provides shared testing utilities for the catalog backend. The crate offers a builder for
//! test contexts backed by in-memory SQLite databases, fixtures for in-memory entity models,
//! and factories that insert entities with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_item_lookup() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_catalog_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let item = factory::create_item(db).await?;
//!     // Perform repository operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
