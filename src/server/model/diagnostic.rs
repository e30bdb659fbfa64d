//! Store connectivity report.
//!
//! The report is built from fixed status strings. Its initial state describes a store
//! that was never reached; the diagnostic service overwrites fields as checks succeed.

use crate::model::diagnostic::DiagnosticDto;

pub const BACKEND_RUNNING: &str = "✅ Running";
pub const DATABASE_NOT_AVAILABLE: &str = "❌ Not Available";
pub const DATABASE_AVAILABLE: &str = "✅ Available";
pub const DATABASE_CONNECTED: &str = "✅ Connected & Working";
pub const DATABASE_NOT_INITIALIZED: &str = "⚠️ Available but not initialized";
pub const DATABASE_ERROR_PREFIX: &str = "⚠️ Connected but Error: ";
pub const ENV_SET: &str = "✅ Set";
pub const ENV_NOT_SET: &str = "❌ Not Set";
pub const STATUS_CONNECTED: &str = "Connected";
pub const STATUS_NOT_CONNECTED: &str = "Not Connected";

/// Maximum number of table names included in a report.
pub const MAX_COLLECTIONS: usize = 10;
/// Maximum number of characters of an error message included in a report.
pub const MAX_ERROR_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub backend: String,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl Diagnostic {
    /// Records a failed table listing, truncating the error to [`MAX_ERROR_CHARS`]
    /// characters.
    pub fn set_error(&mut self, error: &str) {
        let truncated: String = error.chars().take(MAX_ERROR_CHARS).collect();
        self.database = format!("{}{}", DATABASE_ERROR_PREFIX, truncated);
    }

    pub fn into_dto(self) -> DiagnosticDto {
        DiagnosticDto {
            backend: self.backend,
            database: self.database,
            database_url: self.database_url,
            database_name: self.database_name,
            connection_status: self.connection_status,
            collections: self.collections,
        }
    }
}

impl Default for Diagnostic {
    fn default() -> Self {
        Self {
            backend: BACKEND_RUNNING.to_string(),
            database: DATABASE_NOT_AVAILABLE.to_string(),
            database_url: None,
            database_name: None,
            connection_status: STATUS_NOT_CONNECTED.to_string(),
            collections: Vec::new(),
        }
    }
}
