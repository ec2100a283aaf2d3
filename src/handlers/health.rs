use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::server::AppState;

#[derive(Serialize)]
struct Health {
    status: &'static str,
    version: String,
}

pub async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(Health {
        status: "healthy",
        version: state.config.version.clone(),
    })
}
