use fin_server::config::Config;
use fin_server::{AppState, build_router, logger};

use fin_auth::JwtValidator;

use std::error::Error;
use std::time::Duration;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = Config::from_env()?;

    // Initialize logger (before any other logging)
    logger::initialize(&config.log_level, config.log_colored)?;

    info!("Starting fin-server v{}", env!("CARGO_PKG_VERSION"));

    // Initialize database pool
    info!("Connecting to database: {}", config.database_path);

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(&config.database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(Duration::from_secs(5))
                .foreign_keys(true),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../crates/fin-db/migrations")
        .run(&pool)
        .await?;
    info!("Migrations complete");

    // Create JWT validator
    let jwt_validator = if let Some(ref secret) = config.jwt_secret {
        info!("JWT: HS256 authentication enabled");
        JwtValidator::with_hs256(secret.as_bytes())
    } else if let Some(ref public_key) = config.jwt_public_key {
        info!("JWT: RS256 authentication enabled");
        JwtValidator::with_rs256(public_key)?
    } else {
        unreachable!("from_env() ensures JWT config is present")
    };

    // Build application state and router
    let state = AppState::new(pool, jwt_validator, config.plaid.clone());
    let app = build_router(state);

    // Create TCP listener
    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}
