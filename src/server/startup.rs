use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr};

use crate::server::{config::Config, error::AppError};

/// Connects to the configured database and runs pending migrations.
///
/// The store is optional: when `DATABASE_URL` is missing or the connection fails, the
/// failure is logged and `None` is returned so the server still starts. Data routes then
/// answer with `AppError::ServiceUnavailable`.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and name
///
/// # Returns
/// - `Some(DatabaseConnection)` - Connected database with migrations applied
/// - `None` - No connection string configured, or connecting/migrating failed
pub async fn connect_to_database(config: &Config) -> Option<DatabaseConnection> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL is not set, starting without a database");
        return None;
    };

    match try_connect(database_url, config.database_name.as_deref()).await {
        Ok(db) => {
            tracing::info!("Connected to database");
            Some(db)
        }
        Err(err) => {
            tracing::error!("Failed to connect to database: {}", err);
            None
        }
    }
}

async fn try_connect(
    database_url: &str,
    database_name: Option<&str>,
) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false);

    // Only the Postgres driver applies a search path; SQLite ignores it.
    if let Some(name) = database_name {
        opt.set_schema_search_path(name);
    }

    let db = Database::connect(opt).await?;

    if let Some(name) = database_name {
        ensure_schema(&db, name).await?;
    }

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the named schema on Postgres when it does not exist yet.
///
/// Migrations run against the search path, so the schema must exist before them.
/// Other backends have no schemas and are left untouched.
async fn ensure_schema(db: &DatabaseConnection, name: &str) -> Result<(), DbErr> {
    if db.get_database_backend() != DatabaseBackend::Postgres {
        return Ok(());
    }

    db.execute_unprepared(&create_schema_sql(name)).await?;
    tracing::debug!("Ensured schema {} exists", name);

    Ok(())
}

fn create_schema_sql(name: &str) -> String {
    format!(
        "CREATE SCHEMA IF NOT EXISTS \"{}\"",
        name.replace('"', "\"\"")
    )
}

/// Resolves when the process receives Ctrl-C or, on Unix, SIGTERM.
///
/// Passed to `axum::serve(...).with_graceful_shutdown` so in-flight requests finish
/// before the database pool is closed.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
