//! Database repository layer for the catalog.
//!
//! Each repository wraps a borrowed `DatabaseConnection` and handles the queries and
//! inserts for one table. Repositories use SeaORM entity models internally and return
//! domain models, so entities never leave this layer. Insert methods take the current
//! time from their caller and stamp storage timestamps with it.

pub mod blog;
pub mod category;
pub mod contact;
pub mod item;
pub mod schema;

#[cfg(test)]
mod test;
