use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::handlers::{health::health_handler, metrics::metrics_handler, page::page_handler};
use crate::metrics::Metrics;

/// Shared application state: the immutable startup config plus the
/// process-wide counters.
pub struct AppState {
    pub config: Config,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let metrics = Metrics::new(&config.version);
        AppState { config, metrics }
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(page_handler))
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

pub async fn run(listen_addr: &str, state: Arc<AppState>) -> std::io::Result<()> {
    let listener = TcpListener::bind(listen_addr).await?;
    info!(version = %state.config.version, "Responder running on {}", listen_addr);
    axum::serve(listener, app(state)).await
}
