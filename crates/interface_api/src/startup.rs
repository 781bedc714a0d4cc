//! Startup helpers shared by the service binaries

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ApiConfig;

/// Loads configuration for one service.
///
/// Tries the full prefixed environment first (`{PREFIX}_HOST`, `{PREFIX}_PORT`,
/// `{PREFIX}_DATABASE_URL`, `{PREFIX}_LOG_LEVEL`), then falls back per field
/// to the shared `DATABASE_URL` / `RUST_LOG` variables and the given
/// defaults.
pub fn load_config(prefix: &str, default_port: u16) -> ApiConfig {
    ApiConfig::from_env(prefix).unwrap_or_else(|_| {
        let var = |name: &str| std::env::var(format!("{prefix}_{name}")).ok();
        ApiConfig {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: var("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(default_port),
            database_url: var("DATABASE_URL")
                .or_else(|| std::env::var("DATABASE_URL").ok())
                .unwrap_or_else(|| "postgres://localhost/telemed".to_string()),
            log_level: var("LOG_LEVEL")
                .or_else(|| std::env::var("RUST_LOG").ok())
                .unwrap_or_else(|| "info".to_string()),
        }
    })
}

/// Initializes the tracing subscriber for structured logging
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM), enabling graceful shutdown
/// so in-flight requests complete before the process exits.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
