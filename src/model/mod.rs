//! Wire-level data transfer objects.
//!
//! These types define the JSON shapes accepted and returned by the API. Deserialization
//! doubles as validation: enums reject unknown literals, URLs must be absolute http(s)
//! links, and missing required fields are rejected before a handler runs. Storage
//! entities never appear here; the server maps between the two explicitly.

pub mod api;
pub mod blog;
pub mod category;
pub mod contact;
pub mod diagnostic;
pub mod item;
pub mod link;
pub mod timestamp;
