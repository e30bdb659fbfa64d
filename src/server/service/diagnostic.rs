use sea_orm::DatabaseConnection;

use crate::server::{
    data::schema::SchemaRepository,
    model::diagnostic::{
        Diagnostic, DATABASE_AVAILABLE, DATABASE_CONNECTED, DATABASE_NOT_INITIALIZED, ENV_NOT_SET,
        ENV_SET, MAX_COLLECTIONS, STATUS_CONNECTED,
    },
};

/// Builds store connectivity reports.
///
/// Never fails: every error encountered while probing the store is folded into the
/// report's `database` field.
pub struct DiagnosticService<'a> {
    db: Option<&'a DatabaseConnection>,
}

impl<'a> DiagnosticService<'a> {
    pub fn new(db: Option<&'a DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Probes the store by listing its tables.
    ///
    /// # Arguments
    /// - `database_url_set` - Whether `DATABASE_URL` was configured
    /// - `database_name` - Configured `DATABASE_NAME`, if any
    pub async fn report(
        &self,
        database_url_set: bool,
        database_name: Option<&str>,
    ) -> Diagnostic {
        let mut report = Diagnostic::default();

        let Some(db) = self.db else {
            report.database = DATABASE_NOT_INITIALIZED.to_string();
            return report;
        };

        report.database = DATABASE_AVAILABLE.to_string();
        report.database_url = Some(if database_url_set { ENV_SET } else { ENV_NOT_SET }.to_string());
        report.database_name = Some(database_name.unwrap_or(ENV_NOT_SET).to_string());

        match SchemaRepository::new(db).table_names().await {
            Ok(names) => {
                report.collections = names.into_iter().take(MAX_COLLECTIONS).collect();
                report.database = DATABASE_CONNECTED.to_string();
                report.connection_status = STATUS_CONNECTED.to_string();
            }
            Err(err) => {
                tracing::warn!("Diagnostic table listing failed: {}", err);
                report.set_error(&err.to_string());
            }
        }

        report
    }
}
