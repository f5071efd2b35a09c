//! Main HTTP Gateway Server.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use textlens_core::TextDetector;

use crate::{extract_api, health_api, pages};

/// Application state shared across routes.
#[derive(Clone)]
pub struct GatewayState {
    /// The one authenticated OCR handle, constructed at startup.
    pub detector: Arc<dyn TextDetector>,
    pub started_at: Instant,
}

impl GatewayState {
    pub fn new(detector: Arc<dyn TextDetector>) -> Self {
        Self {
            detector,
            started_at: Instant::now(),
        }
    }
}

/// Build the Axum router with all gateway routes.
pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/extract", post(extract_api::extract))
        .route("/api/health", get(health_api::get_health))
        // Upload size is the provider's concern, not ours.
        .layer(DefaultBodyLimit::disable())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Starts the gateway HTTP server.
pub async fn start_server(addr: SocketAddr, state: GatewayState) -> Result<()> {
    let app = build_router(state);

    info!("gateway HTTP server listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
