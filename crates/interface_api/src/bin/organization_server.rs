//! Organization Registration Service - API Server Binary
//!
//! Starts the HTTP server for the organization registration service.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin organization-api
//!
//! # Run with environment variables
//! ORG_API_PORT=8081 DATABASE_URL=postgres://... cargo run --bin organization-api
//! ```
//!
//! # Environment Variables
//!
//! * `ORG_API_HOST` - Server host (default: 0.0.0.0)
//! * `ORG_API_PORT` - Server port (default: 8081)
//! * `ORG_API_DATABASE_URL` / `DATABASE_URL` - PostgreSQL connection string
//! * `ORG_API_LOG_LEVEL` / `RUST_LOG` - Log level (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use infra_db::{create_pool_from_url, run_migrations, PgOrganizationStore};
use interface_api::startup::{init_tracing, load_config, shutdown_signal};
use interface_api::{organization_router, OrganizationState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config("ORG_API", 8081);
    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting organization registration service"
    );

    let pool = create_pool_from_url(&config.database_url).await?;
    run_migrations(&pool).await?;

    let store = Arc::new(PgOrganizationStore::new(pool));
    let app = organization_router(OrganizationState {
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
