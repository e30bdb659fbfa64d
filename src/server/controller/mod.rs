//! HTTP request handlers.
//!
//! Each submodule holds the handlers for one resource. Handlers validate input through
//! the `ApiJson`/`ApiQuery` extractors or typed query constructors before resolving the
//! store, delegate to a service, and convert domain models into DTOs for the response.

pub mod blog;
pub mod category;
pub mod contact;
pub mod item;
pub mod system;

#[cfg(test)]
mod test;
