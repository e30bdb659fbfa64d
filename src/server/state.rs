//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction. It carries the optional database pool and the
//! configuration facts the diagnostic endpoint reports.

use sea_orm::DatabaseConnection;

use crate::server::error::AppError;

/// Application state containing shared resources.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool whose clones
/// share the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, or `None` when startup could not connect.
    ///
    /// Handlers never read this field directly; they go through [`AppState::db`] so that a
    /// missing store consistently surfaces as `AppError::ServiceUnavailable`.
    db: Option<DatabaseConnection>,

    /// Whether `DATABASE_URL` was provided at startup.
    pub database_url_set: bool,

    /// Value of `DATABASE_NAME` at startup, if provided.
    pub database_name: Option<String>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool, `None` if the store is unavailable
    /// - `database_url_set` - Whether a connection string was configured
    /// - `database_name` - Configured logical database name
    pub fn new(
        db: Option<DatabaseConnection>,
        database_url_set: bool,
        database_name: Option<String>,
    ) -> Self {
        Self {
            db,
            database_url_set,
            database_name,
        }
    }

    /// Resolves the shared database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - The store is connected
    /// - `Err(AppError::ServiceUnavailable)` - The connection was never established
    pub fn db(&self) -> Result<&DatabaseConnection, AppError> {
        self.db.as_ref().ok_or(AppError::ServiceUnavailable)
    }

    /// Returns the connection if one exists, without failing.
    ///
    /// Used only by diagnostics, which report absence instead of erroring.
    pub fn try_db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
