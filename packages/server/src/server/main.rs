// Main entry point for API server

use anyhow::{Context, Result};
use server_core::{
    server::{build_app, MIGRATOR},
    Config,
};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Job Aggregator API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    let pool = connect(&config).await?;

    // Build application
    let app = build_app(pool, &config.allowed_origins);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

/// Eager mode fails startup when the database is unreachable. Lazy mode
/// hands out a pool that connects on first use, so every request retries;
/// migrations then run on the first request that reaches the store.
async fn connect(config: &Config) -> Result<PgPool> {
    let options = PgPoolOptions::new().max_connections(config.database_max_connections);

    if config.database_connect_lazy {
        tracing::info!("Database connection deferred until first request");
        let pool = options
            .connect_lazy(&config.database_url)
            .context("Invalid DATABASE_URL")?;
        return Ok(pool);
    }

    tracing::info!("Connecting to database...");
    let pool = options
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    tracing::info!("Running database migrations...");
    MIGRATOR
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations complete");

    Ok(pool)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for ctrl+c");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received ctrl+c, shutting down");
}
