//! Domain models and operation parameters.
//!
//! These types sit between the data layer and the controllers. Repositories convert
//! entity models into them with `from_entity`, and controllers turn them into DTOs with
//! `into_dto`, so neither entities nor DTOs cross more than one layer boundary.

pub mod blog;
pub mod category;
pub mod contact;
pub mod diagnostic;
pub mod item;
