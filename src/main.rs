mod config;
mod handlers;
mod metrics;
mod server;

use std::sync::Arc;

use dotenv::dotenv;
use tracing::{error, info};

use crate::config::Config;
use crate::server::AppState;

const LISTEN_ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    info!(version = %config.version, "Starting canary responder");

    let state = Arc::new(AppState::new(config));
    if let Err(e) = server::run(LISTEN_ADDR, state).await {
        error!("Failed to run the responder on {}: {}", LISTEN_ADDR, e);
        std::process::exit(1);
    }
}
