//! Infrastructure Database Layer
//!
//! PostgreSQL persistence for the record services, built on SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: each domain's store port is
//! implemented here by a repository struct over a shared connection pool.
//! The rest of the system depends only on the port traits, so this crate is
//! the single place that knows SQL.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, create_pool, run_migrations, PgVitalStore};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/telemed")).await?;
//! run_migrations(&pool).await?;
//! let store = PgVitalStore::new(pool);
//! ```

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::DatabaseError;
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use repositories::{PgOrganizationStore, PgVitalStore};

/// Migrations bundled into the binary at compile time
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Applies any pending migrations.
///
/// # Errors
///
/// Returns `DatabaseError::MigrationFailed` if a migration cannot be applied.
pub async fn run_migrations(pool: &DatabasePool) -> Result<(), DatabaseError> {
    tracing::info!("Running database migrations");
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
    tracing::info!("Database schema up to date");
    Ok(())
}
