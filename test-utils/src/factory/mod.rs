//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests. Each
//! entity has a `Factory` struct for customization and a `create_*` convenience function
//! for quick default creation. Defaults come from the matching fixture with unique slugs.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let item = factory::create_item(&db).await?;
//! let category = factory::category::CategoryFactory::new(&db)
//!     .name("Games")
//!     .kind("game")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `app_item` - Create app/game listing entities
//! - `category` - Create category entities
//! - `blog_post` - Create blog post entities
//! - `helpers` - Shared ID generation

pub mod app_item;
pub mod blog_post;
pub mod category;
pub mod helpers;

pub use app_item::create_item;
pub use blog_post::create_post;
pub use category::create_category;
