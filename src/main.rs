mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // A missing or unreachable database leaves the store unset; data routes then fail
    // individually while liveness and diagnostics keep answering.
    let db = startup::connect_to_database(&config).await;

    let state = AppState::new(
        db.clone(),
        config.database_url.is_some(),
        config.database_name.clone(),
    );
    let app = router::app(state);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("Starting server on {}:{}", config.host, config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    if let Some(db) = db {
        tracing::info!("Closing database connection");
        db.close().await?;
    }

    Ok(())
}
