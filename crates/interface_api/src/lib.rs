//! HTTP API Layer
//!
//! REST surface for the two record services, built on Axum. Each service gets
//! its own router over its own store port; the binaries in `src/bin` wire a
//! PostgreSQL store in, the test suites wire an in-memory one.
//!
//! # Architecture
//!
//! - **Handlers**: one module per service, thin pass-throughs to the store
//! - **DTOs**: request/response shapes with declarative validation
//! - **Error Handling**: consistent `{error, message, details?}` bodies
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{vital_router, VitalState};
//!
//! let app = vital_router(VitalState { store, config });
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod startup;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_organization::OrganizationStore;
use domain_vital::VitalStore;

use crate::config::ApiConfig;
use crate::handlers::{health, organization, vital};
use crate::middleware::request_log_middleware;

/// Application state for the vital record service
#[derive(Clone)]
pub struct VitalState {
    pub store: Arc<dyn VitalStore>,
    pub config: ApiConfig,
}

/// Application state for the organization registration service
#[derive(Clone)]
pub struct OrganizationState {
    pub store: Arc<dyn OrganizationStore>,
    pub config: ApiConfig,
}

/// Creates the router for the vital record service
///
/// # Arguments
///
/// * `state` - Store and configuration the handlers run against
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn vital_router(state: VitalState) -> Router {
    let api_routes = Router::new()
        .route("/", post(vital::create_vital))
        .route("/", get(vital::list_vitals))
        .route("/:id", get(vital::get_vital))
        .route("/:id", put(vital::update_vital))
        .route("/:id", delete(vital::delete_vital));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(vital::readiness_check))
        .nest("/api/v1/vital", api_routes)
        .layer(axum_middleware::from_fn(request_log_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Creates the router for the organization registration service
pub fn organization_router(state: OrganizationState) -> Router {
    let api_routes = Router::new()
        .route("/", post(organization::create_organization))
        .route("/", get(organization::list_organizations))
        .route("/:id", get(organization::get_organization))
        .route("/:id", put(organization::update_organization))
        .route("/:id", delete(organization::delete_organization));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(organization::readiness_check))
        .nest("/api/v1/organization", api_routes)
        .layer(axum_middleware::from_fn(request_log_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
