//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod app;
mod config;
mod seed;

use std::net::SocketAddr;
use std::sync::Arc;

use auth::PgAuthRepository;
use notes::PgNoteRepository;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,notes=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    let auth_config = Arc::new(config.auth.clone());

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let users = PgAuthRepository::new(pool.clone());
    let notes = PgNoteRepository::new(pool.clone());

    // Demo data failures should not prevent server startup
    if config.seed_demo_data {
        if let Err(e) = seed::seed_demo_data(
            Arc::new(users.clone()),
            Arc::new(notes.clone()),
            auth_config.clone(),
        )
        .await
        {
            tracing::warn!(error = %e, "Demo data seeding failed, continuing anyway");
        }
    }

    // Build router
    let app = app::api_router(notes, users, auth_config).layer(app::cors_layer(&config.frontend_origins));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
