//! webfuncs API Server
//!
//! Main entry point for the webfuncs HTTP service.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use webfuncs_api::{AppState, create_router};
use webfuncs_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "webfuncs=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    info!(
        default_currency = %config.money.default_currency,
        position = %config.money.position,
        "Money formatting configured"
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);

    // Create router
    let app = create_router(AppState::new(config));

    // Start server; connect info feeds REMOTE_ADDR for IP detection
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
