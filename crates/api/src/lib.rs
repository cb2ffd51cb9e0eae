//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes over the core helpers
//! - Session middleware
//! - Request extractors
//! - Error responses

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use webfuncs_core::currency::MoneyFormatter;
use webfuncs_shared::AppConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<AppConfig>,
    /// Money formatter seeded with configured defaults.
    pub money: Arc<MoneyFormatter>,
}

impl AppState {
    /// Builds the state from configuration.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let money = MoneyFormatter::new(&config.money);
        Self {
            config: Arc::new(config),
            money: Arc::new(money),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
