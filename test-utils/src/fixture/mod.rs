//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixture functions create in-memory entity models used as defaults by the factories and
//! directly by unit tests that only need a model. Unlike factories, fixtures do NOT insert
//! data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let item = fixture::app_item::entity();
//! assert_eq!(item.kind, "app");
//! ```

pub mod app_item;
pub mod blog_post;
pub mod category;

pub use app_item::entity as app_item_entity;
pub use blog_post::entity as blog_post_entity;
pub use category::entity as category_entity;
