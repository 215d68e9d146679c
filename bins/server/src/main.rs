//! Contact Relay Server
//!
//! Main entry point for the contact relay service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use relay_api::{AppState, create_router};
use relay_core::delivery::DeliveryClient;
use relay_core::relay::ContactRelay;
use relay_core::storage::BlobStore;
use relay_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "relay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    // Create provider clients once; they are shared across requests
    let store = BlobStore::from_provider(&config.storage)?;
    info!(
        provider = config.storage.name(),
        bucket = config.storage.bucket(),
        "Attachment store configured"
    );

    let mailer = DeliveryClient::new(&config.delivery);
    info!(api_url = %config.delivery.api_url, "Delivery client configured");

    let relay = ContactRelay::new(Arc::new(store), Arc::new(mailer), &config.delivery);

    // Create application state
    let state = AppState {
        relay: Arc::new(relay),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
