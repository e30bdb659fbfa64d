//! Service layer between controllers and repositories.
//!
//! Services work with domain models rather than DTOs or entity models. They are
//! responsible for:
//!
//! - **Stamping**: Reading the clock once per write and handing it to the repository
//! - **Orchestration**: Running typed queries against the right repository
//! - **Error Mapping**: Turning lookup misses into `AppError::NotFound`
//! - **Diagnostics**: Summarizing store connectivity without failing the request

pub mod blog;
pub mod category;
pub mod contact;
pub mod diagnostic;
pub mod item;
