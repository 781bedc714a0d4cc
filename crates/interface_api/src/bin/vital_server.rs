//! Vital Record Service - API Server Binary
//!
//! Starts the HTTP server for the vital signs record service.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin vital-api
//!
//! # Run with environment variables
//! VITAL_API_PORT=8080 DATABASE_URL=postgres://... cargo run --bin vital-api
//! ```
//!
//! # Environment Variables
//!
//! * `VITAL_API_HOST` - Server host (default: 0.0.0.0)
//! * `VITAL_API_PORT` - Server port (default: 8080)
//! * `VITAL_API_DATABASE_URL` / `DATABASE_URL` - PostgreSQL connection string
//! * `VITAL_API_LOG_LEVEL` / `RUST_LOG` - Log level (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use infra_db::{create_pool_from_url, run_migrations, PgVitalStore};
use interface_api::startup::{init_tracing, load_config, shutdown_signal};
use interface_api::{vital_router, VitalState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config("VITAL_API", 8080);
    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting vital record service"
    );

    let pool = create_pool_from_url(&config.database_url).await?;
    run_migrations(&pool).await?;

    let store = Arc::new(PgVitalStore::new(pool));
    let app = vital_router(VitalState {
        store,
        config: config.clone(),
    });

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .context("invalid listen address")?;
    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
