//! SeaORM entity models for the catalog store.
//!
//! Each module maps one table. List-valued fields (tags, features, screenshots)
//! are stored as JSON columns through [`StringList`].

pub mod prelude;

pub mod app_item;
pub mod blog_post;
pub mod category;
pub mod contact_message;
pub mod string_list;

pub use string_list::StringList;
