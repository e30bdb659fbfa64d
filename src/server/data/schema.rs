use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, FromQueryResult, Statement};

#[derive(Debug, FromQueryResult)]
struct TableName {
    name: String,
}

/// Read-only access to the database catalog.
pub struct SchemaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SchemaRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the names of the tables in the current database or schema, sorted by name.
    ///
    /// Engine-internal tables (SQLite's `sqlite_*`) are excluded.
    pub async fn table_names(&self) -> Result<Vec<String>, DbErr> {
        let backend = self.db.get_database_backend();
        let sql = match backend {
            DatabaseBackend::Sqlite => {
                "SELECT name FROM sqlite_master \
                 WHERE type = 'table' AND name NOT LIKE 'sqlite_%' \
                 ORDER BY name"
            }
            DatabaseBackend::Postgres => {
                "SELECT table_name::text AS name FROM information_schema.tables \
                 WHERE table_schema = current_schema() \
                 ORDER BY table_name"
            }
            _ => {
                "SELECT table_name AS name FROM information_schema.tables \
                 WHERE table_schema = DATABASE() \
                 ORDER BY table_name"
            }
        };

        let tables = TableName::find_by_statement(Statement::from_string(backend, sql))
            .all(self.db)
            .await?;

        Ok(tables.into_iter().map(|t| t.name).collect())
    }
}
